//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::BoardSummary;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Known boards (summary form, no nested lanes)
    pub boards: Vec<BoardSummary>,
    /// Currently selected board ID
    pub current_board_id: Option<i64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the board list wholesale (fetch result)
pub fn store_set_boards(store: &AppStore, boards: Vec<BoardSummary>) {
    *store.boards().write() = boards;
}

/// Add a board to the store
pub fn store_add_board(store: &AppStore, board: BoardSummary) {
    store.boards().write().push(board);
}

/// Update a board in the store by ID
pub fn store_update_board(store: &AppStore, updated: BoardSummary) {
    store
        .boards()
        .write()
        .iter_mut()
        .find(|board| board.id == updated.id)
        .map(|board| *board = updated);
}

/// Remove a board from the store by ID
pub fn store_remove_board(store: &AppStore, board_id: i64) {
    store.boards().write().retain(|board| board.id != board_id);
}

/// Select a board (None = no board open)
pub fn store_select_board(store: &AppStore, board_id: Option<i64>) {
    *store.current_board_id().write() = board_id;
}
