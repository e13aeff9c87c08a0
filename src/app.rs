//! Project Board Frontend App
//!
//! Header with board selector + new-board form, and the active board view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{BoardForm, BoardView};
use crate::context::AppContext;
use crate::models::BoardSummary;
use crate::store::{
    store_add_board, store_select_board, store_set_boards, AppState, AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (error, set_error) = signal::<Option<String>>(None);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (error, set_error));
    provide_context(ctx);

    let (show_board_form, set_show_board_form) = signal(false);
    let (loading, set_loading) = signal(true);

    // Load boards on mount and whenever a reload is requested
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::get_boards().await {
                Ok(boards) => {
                    // Select the first board by default if none is selected
                    if store.current_board_id().get_untracked().is_none() {
                        if let Some(first) = boards.first() {
                            store_select_board(&store, Some(first.id));
                        }
                    }
                    store_set_boards(&store, boards);
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[APP] {}", e).into());
                    ctx.set_error("Failed to fetch boards. Please try again later.");
                }
            }
            set_loading.set(false);
        });
    });

    let on_board_created = Callback::new(move |board: BoardSummary| {
        store_select_board(&store, Some(board.id));
        store_add_board(&store, board);
        set_show_board_form.set(false);
        ctx.clear_error();
    });

    let on_form_cancel = Callback::new(move |_: ()| set_show_board_form.set(false));

    let select_board = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        if let Ok(id) = select.value().parse::<i64>() {
            store_select_board(&store, Some(id));
        }
    };

    let no_boards = move || !loading.get() && store.boards().read().is_empty();

    view! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title">"Simple Project Board"</h1>
                <div class="header-controls">
                    {move || (!store.boards().read().is_empty()).then(|| view! {
                        <select class="board-select" on:change=select_board>
                            <For
                                each=move || store.boards().get()
                                key=|board| board.clone()
                                children=move |board| {
                                    let id = board.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || store.current_board_id().get() == Some(id)
                                        >
                                            {board.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    })}
                    <button class="btn btn-primary" on:click=move |_| set_show_board_form.set(true)>
                        "New Board"
                    </button>
                </div>
            </header>

            <main class="app-main">
                {move || ctx.error.get().map(|message| view! {
                    <div class="error-banner">
                        {message}
                        <button class="error-dismiss-btn" on:click=move |_| ctx.clear_error()>
                            "×"
                        </button>
                    </div>
                })}

                {move || show_board_form.get().then(|| view! {
                    <BoardForm on_created=on_board_created on_cancel=on_form_cancel />
                })}

                {move || (loading.get() && store.boards().read().is_empty()).then(|| view! {
                    <div class="board-message">"Loading boards..."</div>
                })}

                // Keyed on the selected board only, so board list refreshes and
                // form toggles never remount the board view
                {move || store.current_board_id().get().map(|id| view! {
                    <BoardView board_id=id />
                })}

                {move || (no_boards() && !show_board_form.get()).then(|| view! {
                    <div class="empty-state">
                        <h2>"No boards found"</h2>
                        <p>"Create your first board to get started"</p>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| set_show_board_form.set(true)
                        >
                            "Create Board"
                        </button>
                    </div>
                })}
            </main>
        </div>
    }
}
