//! Repository Layer
//!
//! SQLite-backed data access. All repositories share one connection behind
//! an async mutex; helpers that need the open connection take `&Connection`
//! so a single lock spans each operation.

mod board_repo;
mod card;
mod db;
mod lane;
#[cfg(test)]
mod tests;
mod traits;

pub use board_repo::BoardRepository;
pub use card::{CardPositioningOperations, CardRepository};
pub use db::{init_db, init_db_in_memory};
pub use lane::{LanePositioningOperations, LaneRepository};
pub use traits::Repository;

use crate::domain::DomainError;

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Timestamp bound into every row write
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
