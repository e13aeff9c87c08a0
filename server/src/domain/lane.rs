//! Lane Entity

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::entity::Entity;

/// An ordered column of cards within a board. `position` is the lane's
/// zero-based rank among its board's lanes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    pub id: i64,
    pub name: String,
    pub position: i64,
    pub board_id: i64,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Lane {
    pub fn new(id: i64, name: String, board_id: i64, position: i64) -> Self {
        Self {
            id,
            name,
            position,
            board_id,
            cards: Vec::new(),
        }
    }
}

impl Entity for Lane {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
