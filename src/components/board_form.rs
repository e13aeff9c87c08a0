//! New Board Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::BoardSummary;

/// Inline form for creating a board
#[component]
pub fn BoardForm(on_created: Callback<BoardSummary>, on_cancel: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            return;
        }
        let description = description.get();
        spawn_local(async move {
            match api::create_board(&name, &description).await {
                Ok(board) => on_created.run(board),
                Err(e) => {
                    web_sys::console::log_1(&format!("[APP] {}", e).into());
                    ctx.set_error("Failed to create new board");
                }
            }
        });
    };

    view! {
        <div class="board-form">
            <h2>"Create New Board"</h2>
            <form on:submit=submit>
                <div class="form-field">
                    <label>"Board Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                </div>
                <div class="form-field">
                    <label>"Description (optional)"</label>
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_description.set(input.value());
                        }
                    ></textarea>
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Create Board"</button>
                </div>
            </form>
        </div>
    }
}
