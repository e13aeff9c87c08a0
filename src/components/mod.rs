//! UI Components
//!
//! Leptos components for the board view.

mod board;
mod board_form;
mod card;
mod card_modal;
mod lane;
mod lane_modal;
mod search_bar;

pub use board::{BoardPhase, BoardView, ModalState};
pub use board_form::BoardForm;
pub use card::CardTile;
pub use card_modal::{CardDraft, CardModal};
pub use lane::{CardSlot, LaneColumn};
pub use lane_modal::LaneModal;
pub use search_bar::SearchBar;
