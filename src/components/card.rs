//! Card Tile Component

use leptos::prelude::*;

use leptos_dnd::{make_on_mousedown, DndSignals, DragKind};

use crate::models::Card;

/// A single card inside a lane
#[component]
pub fn CardTile(
    card: Card,
    dnd: DndSignals,
    on_edit: Callback<Card>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let card_id = card.id;
    let card_for_edit = card.clone();

    let on_mousedown = make_on_mousedown(dnd, DragKind::Card, card_id);

    let is_dragging =
        move || matches!(dnd.dragging_read.get(), Some((DragKind::Card, id)) if id == card_id);
    let card_class = {
        let color = card.color;
        move || {
            let mut c = format!("card-tile color-{}", color.as_str());
            if is_dragging() {
                c.push_str(" dragging");
            }
            c
        }
    };

    let description = card.description.clone().filter(|d| !d.is_empty());
    let due_date = card.due_date.clone();

    view! {
        <div class=card_class on:mousedown=on_mousedown>
            <div class="card-top">
                <span class="card-title">{card.title.clone()}</span>
                <div class="card-actions">
                    <button
                        class="card-action-btn"
                        on:click=move |_| on_edit.run(card_for_edit.clone())
                    >
                        "Edit"
                    </button>
                    <button class="card-action-btn danger" on:click=move |_| on_delete.run(card_id)>
                        "Delete"
                    </button>
                </div>
            </div>
            {description.map(|d| view! { <div class="card-description">{d}</div> })}
            {due_date.map(|d| view! { <div class="card-due-date">{format!("Due {}", d)}</div> })}
        </div>
    }
}
