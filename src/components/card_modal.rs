//! Card Modal Component
//!
//! Create/edit form for a card: title, description, color tag, due date.
//! `card = None` creates a new card in the given lane.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Card, CardColor};

/// Form values collected by the card modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub description: Option<String>,
    pub color: CardColor,
    pub due_date: Option<String>,
}

#[component]
pub fn CardModal(
    lane_id: i64,
    card: Option<Card>,
    on_save: Callback<(i64, Option<i64>, CardDraft)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let card_id = card.as_ref().map(|c| c.id);
    let (title, set_title) = signal(card.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        card.as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let (color, set_color) = signal(card.as_ref().map(|c| c.color).unwrap_or_default());
    // Date inputs want YYYY-MM-DD; keep only that prefix of a stored value
    let (due_date, set_due_date) = signal(
        card.as_ref()
            .and_then(|c| c.due_date.clone())
            .map(|d| d.chars().take(10).collect::<String>())
            .unwrap_or_default(),
    );

    let heading = if card_id.is_some() { "Edit Card" } else { "Create New Card" };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.trim().is_empty() {
            return;
        }
        let description = Some(description.get()).filter(|d| !d.is_empty());
        let due = Some(due_date.get()).filter(|d| !d.is_empty());
        let draft = CardDraft {
            title,
            description,
            color: color.get(),
            due_date: due,
        };
        on_save.run((lane_id, card_id, draft));
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2 class="modal-title">{heading}</h2>
                <form on:submit=submit>
                    <div class="form-field">
                        <label>"Title"</label>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                    </div>

                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>
                    </div>

                    <div class="form-field">
                        <label>"Color"</label>
                        <select on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            set_color.set(CardColor::from_str(&select.value()));
                        }>
                            {CardColor::all()
                                .iter()
                                .map(|c| {
                                    let value = c.as_str();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || color.get().as_str() == value
                                        >
                                            {capitalize(value)}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-field">
                        <label>"Due Date"</label>
                        <input
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_due_date.set(input.value());
                            }
                        />
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
