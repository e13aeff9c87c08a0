//! Board Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::lane::Lane;

/// Top-level container of lanes. The summary form (list endpoints) carries
/// no nested lanes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Board {
    pub fn new(id: i64, name: String, description: String) -> Self {
        Self { id, name, description }
    }
}

impl Entity for Board {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Full board payload: the board with its ordered lanes, each lane with its
/// ordered cards. The unit of fetch/replace for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    pub lanes: Vec<Lane>,
}

/// Lane names created with every new board
pub const DEFAULT_LANES: &[&str] = &["To Do", "In Progress", "Done"];
