//! Project Board Frontend
//!
//! Leptos CSR application: board snapshot state, optimistic drag-reorder
//! synchronization, REST client with retry, and the board UI components.

pub mod api;
pub mod app;
pub mod components;
pub mod context;
pub mod models;
pub mod reorder;
pub mod search;
pub mod store;
