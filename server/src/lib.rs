//! Project Board Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access over SQLite
//! - api: axum handlers implementing the REST contract

use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

pub mod api;
pub mod domain;
pub mod repository;

use repository::{BoardRepository, CardRepository, LaneRepository};

/// Application state shared across handlers. All repositories serialize
/// their access through one connection.
#[derive(Clone)]
pub struct AppState {
    pub boards: BoardRepository,
    pub lanes: LaneRepository,
    pub cards: CardRepository,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        let conn = Arc::new(Mutex::new(conn));
        Self {
            boards: BoardRepository::new(conn.clone()),
            lanes: LaneRepository::new(conn.clone()),
            cards: CardRepository::new(conn),
        }
    }
}
