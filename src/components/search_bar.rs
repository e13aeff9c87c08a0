//! Search Bar Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Text input reporting every change to `on_search`
#[component]
pub fn SearchBar(on_search: Callback<String>, placeholder: &'static str) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || term.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    set_term.set(value.clone());
                    on_search.run(value);
                }
            />
            {move || (!term.get().is_empty()).then(|| view! {
                <button
                    class="search-clear-btn"
                    on:click=move |_| {
                        set_term.set(String::new());
                        on_search.run(String::new());
                    }
                >
                    "×"
                </button>
            })}
        </div>
    }
}
