//! Lane Modal Component
//!
//! Create/edit form for a lane. `lane = None` creates a new lane.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Lane;

#[component]
pub fn LaneModal(
    lane: Option<Lane>,
    on_save: Callback<(Option<i64>, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let lane_id = lane.as_ref().map(|l| l.id);
    let (name, set_name) = signal(lane.as_ref().map(|l| l.name.clone()).unwrap_or_default());

    let title = if lane_id.is_some() { "Edit Lane" } else { "Create New Lane" };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            return;
        }
        on_save.run((lane_id, name));
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2 class="modal-title">{title}</h2>
                <form on:submit=submit>
                    <div class="form-field">
                        <label>"Name"</label>
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
