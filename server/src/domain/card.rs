//! Card Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Card color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
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
}

/// A single work item. `position` is the card's zero-based rank within its
/// owning lane; `lane_id` addresses the owning lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub color: CardColor,
    pub position: i64,
    pub due_date: Option<String>,
    pub lane_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl Entity for Card {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_round_trip() {
        assert_eq!(CardColor::from_str("green"), CardColor::Green);
        assert_eq!(CardColor::Green.as_str(), "green");
        assert_eq!(CardColor::from_str("mauve"), CardColor::White);
    }

    #[test]
    fn test_color_serializes_lowercase() {
        let json = serde_json::to_string(&CardColor::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
    }
}
