//! Card Search Filter
//!
//! View projection over a board snapshot. Filtering never changes positions
//! or lane membership and is never sent to the backend.

use crate::models::Board;

/// Restrict every lane's card list to cards whose title or description
/// contains `term` case-insensitively. An empty or whitespace-only term
/// returns the board unchanged.
pub fn filter_board(board: &Board, term: &str) -> Board {
    let term = term.trim();
    if term.is_empty() {
        return board.clone();
    }
    let needle = term.to_lowercase();

    let lanes = board
        .lanes
        .iter()
        .map(|lane| {
            let cards = lane
                .cards
                .iter()
                .filter(|card| {
                    card.title.to_lowercase().contains(&needle)
                        || card
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&needle))
                })
                .cloned()
                .collect();
            let mut lane = lane.clone();
            lane.cards = cards;
            lane
        })
        .collect();

    Board {
        id: board.id,
        name: board.name.clone(),
        description: board.description.clone(),
        lanes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, CardColor, Lane};

    fn sample_board() -> Board {
        let cards = vec![
            Card {
                id: 100,
                title: "Write release notes".to_string(),
                description: Some("Draft the changelog".to_string()),
                color: CardColor::White,
                position: 0,
                due_date: None,
                lane_id: 10,
            },
            Card {
                id: 101,
                title: "Fix login bug".to_string(),
                description: None,
                color: CardColor::Red,
                position: 1,
                due_date: None,
                lane_id: 10,
            },
        ];
        Board {
            id: 1,
            name: "Board".to_string(),
            description: String::new(),
            lanes: vec![Lane {
                id: 10,
                name: "Todo".to_string(),
                position: 0,
                board_id: 1,
                cards,
            }],
        }
    }

    #[test]
    fn test_empty_term_returns_board_unchanged() {
        let board = sample_board();
        assert_eq!(filter_board(&board, ""), board);
        assert_eq!(filter_board(&board, "   "), board);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let board = sample_board();
        let filtered = filter_board(&board, "LOGIN");
        assert_eq!(filtered.lanes[0].cards.len(), 1);
        assert_eq!(filtered.lanes[0].cards[0].id, 101);
    }

    #[test]
    fn test_matches_description() {
        let board = sample_board();
        let filtered = filter_board(&board, "changelog");
        assert_eq!(filtered.lanes[0].cards.len(), 1);
        assert_eq!(filtered.lanes[0].cards[0].id, 100);
    }

    #[test]
    fn test_no_match_leaves_empty_lane() {
        let board = sample_board();
        let filtered = filter_board(&board, "nothing matches this");
        assert_eq!(filtered.lanes.len(), 1);
        assert!(filtered.lanes[0].cards.is_empty());
    }

    #[test]
    fn test_filtering_preserves_positions_and_lane_ids() {
        let board = sample_board();
        let filtered = filter_board(&board, "login");
        let card = &filtered.lanes[0].cards[0];
        // The retained card keeps its original rank and lane, even though it
        // is now alone in the filtered view
        assert_eq!(card.position, 1);
        assert_eq!(card.lane_id, 10);
        assert_eq!(filtered.lanes[0].position, 0);
    }
}
