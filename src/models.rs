//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Card color tag (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    #[default]
    White,
    Blue,
    Green,
    Yellow,
    Red,
}

impl CardColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::White => "white",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Red => "red",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "blue" => CardColor::Blue,
            "green" => CardColor::Green,
            "yellow" => CardColor::Yellow,
            "red" => CardColor::Red,
            _ => CardColor::White,
        }
    }

    /// All selectable colors, in modal display order
    pub fn all() -> &'static [CardColor] {
        &[
            CardColor::White,
            CardColor::Blue,
            CardColor::Green,
            CardColor::Yellow,
            CardColor::Red,
        ]
    }
}

/// Board summary as returned by the list endpoint (no nested lanes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Full board snapshot with nested lanes and cards
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub lanes: Vec<Lane>,
}

/// Lane data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lane {
    pub id: i64,
    pub name: String,
    pub position: i64,
    pub board_id: i64,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub color: CardColor,
    pub position: i64,
    pub due_date: Option<String>,
    pub lane_id: i64,
}
