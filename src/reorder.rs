//! Drag Reorder Synchronization
//!
//! Computes the optimistically reordered board snapshot for a finished drag
//! gesture, together with the remote mutation that persists it. The snapshot
//! is applied locally before any network call; a failed remote call is rolled
//! back by re-fetching the board (server is truth).

use crate::models::Board;

/// What kind of entity a drag gesture moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Lane,
    Card,
}

/// A position inside a container: the board's lane strip for lanes,
/// a lane's card list for cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub container_id: i64,
    pub index: usize,
}

/// Completed drag gesture as reported by the presentation layer.
///
/// `destination` is `None` for a cancelled drag. The destination index is
/// the index in the destination list *after* the dragged item has been
/// removed (list-splice semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub kind: ItemKind,
    pub item_id: i64,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

/// Remote mutation derived from an applied reorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteMutation {
    /// Persist the full lane order of a board
    ReorderLanes { board_id: i64, lane_order: Vec<i64> },
    /// Move a card to a lane at a position, with the destination lane's full
    /// card order for server-side position assignment. On a cross-lane move
    /// `source_reorder` carries the source lane's remaining order so its
    /// positions are re-persisted as well.
    MoveCard {
        card_id: i64,
        lane_id: i64,
        position: usize,
        card_order: Vec<i64>,
        source_reorder: Option<(i64, Vec<i64>)>,
    },
}

/// Apply a drag result to a board snapshot.
///
/// Returns the new snapshot and the remote mutation to issue, or `None` when
/// the drag is a no-op (cancelled, dropped back onto its own slot, or stale
/// against the current snapshot). The input board is never mutated; the
/// returned snapshot is a structurally new value.
pub fn apply_reorder(board: &Board, drag: &DragResult) -> Option<(Board, RemoteMutation)> {
    let dest = drag.destination?;

    // Dropped in the same position
    if dest.container_id == drag.source.container_id && dest.index == drag.source.index {
        return None;
    }

    match drag.kind {
        ItemKind::Lane => apply_lane_reorder(board, drag, dest),
        ItemKind::Card => apply_card_reorder(board, drag, dest),
    }
}

fn apply_lane_reorder(
    board: &Board,
    drag: &DragResult,
    dest: DragLocation,
) -> Option<(Board, RemoteMutation)> {
    // Lanes live in the board's strip; a stale gesture against another board
    // or a shifted snapshot is ignored.
    if drag.source.container_id != board.id || dest.container_id != board.id {
        return None;
    }
    if drag.source.index >= board.lanes.len() || board.lanes[drag.source.index].id != drag.item_id {
        return None;
    }

    let mut next = board.clone();
    let moved = next.lanes.remove(drag.source.index);
    let index = dest.index.min(next.lanes.len());
    next.lanes.insert(index, moved);

    // Every lane's position becomes its new index, not just the moved one
    for (i, lane) in next.lanes.iter_mut().enumerate() {
        lane.position = i as i64;
    }

    let lane_order = next.lanes.iter().map(|l| l.id).collect();
    let mutation = RemoteMutation::ReorderLanes {
        board_id: board.id,
        lane_order,
    };
    Some((next, mutation))
}

fn apply_card_reorder(
    board: &Board,
    drag: &DragResult,
    dest: DragLocation,
) -> Option<(Board, RemoteMutation)> {
    let source_pos = board
        .lanes
        .iter()
        .position(|l| l.id == drag.source.container_id)?;
    let dest_pos = board.lanes.iter().position(|l| l.id == dest.container_id)?;

    let mut next = board.clone();

    {
        let source_lane = &mut next.lanes[source_pos];
        if drag.source.index >= source_lane.cards.len()
            || source_lane.cards[drag.source.index].id != drag.item_id
        {
            return None;
        }
    }

    let mut moved = next.lanes[source_pos].cards.remove(drag.source.index);
    if source_pos != dest_pos {
        moved.lane_id = next.lanes[dest_pos].id;
    }
    let index = dest.index.min(next.lanes[dest_pos].cards.len());
    next.lanes[dest_pos].cards.insert(index, moved);

    // Recompute positions in the destination lane, and in the source lane
    // when the card crossed lanes (its remaining cards must stay contiguous)
    for (i, card) in next.lanes[dest_pos].cards.iter_mut().enumerate() {
        card.position = i as i64;
    }
    if source_pos != dest_pos {
        for (i, card) in next.lanes[source_pos].cards.iter_mut().enumerate() {
            card.position = i as i64;
        }
    }

    let card_order = next.lanes[dest_pos].cards.iter().map(|c| c.id).collect();
    let source_reorder = (source_pos != dest_pos).then(|| {
        (
            next.lanes[source_pos].id,
            next.lanes[source_pos].cards.iter().map(|c| c.id).collect(),
        )
    });

    let mutation = RemoteMutation::MoveCard {
        card_id: drag.item_id,
        lane_id: next.lanes[dest_pos].id,
        position: index,
        card_order,
        source_reorder,
    };
    Some((next, mutation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, CardColor, Lane};

    fn card(id: i64, lane_id: i64, position: i64) -> Card {
        Card {
            id,
            title: format!("Card {}", id),
            description: None,
            color: CardColor::White,
            position,
            due_date: None,
            lane_id,
        }
    }

    fn lane(id: i64, position: i64, card_ids: &[i64]) -> Lane {
        Lane {
            id,
            name: format!("Lane {}", id),
            position,
            board_id: 1,
            cards: card_ids
                .iter()
                .enumerate()
                .map(|(i, &cid)| card(cid, id, i as i64))
                .collect(),
        }
    }

    fn board(lanes: Vec<Lane>) -> Board {
        Board {
            id: 1,
            name: "Board".to_string(),
            description: String::new(),
            lanes,
        }
    }

    fn lane_drag(item_id: i64, from: usize, to: usize) -> DragResult {
        DragResult {
            kind: ItemKind::Lane,
            item_id,
            source: DragLocation { container_id: 1, index: from },
            destination: Some(DragLocation { container_id: 1, index: to }),
        }
    }

    fn card_drag(item_id: i64, from_lane: i64, from: usize, to_lane: i64, to: usize) -> DragResult {
        DragResult {
            kind: ItemKind::Card,
            item_id,
            source: DragLocation { container_id: from_lane, index: from },
            destination: Some(DragLocation { container_id: to_lane, index: to }),
        }
    }

    #[test]
    fn test_cancelled_drag_is_noop() {
        let b = board(vec![lane(10, 0, &[]), lane(11, 1, &[])]);
        let drag = DragResult {
            kind: ItemKind::Lane,
            item_id: 10,
            source: DragLocation { container_id: 1, index: 0 },
            destination: None,
        };
        assert!(apply_reorder(&b, &drag).is_none());
    }

    #[test]
    fn test_same_slot_drop_is_noop() {
        let b = board(vec![lane(10, 0, &[100, 101]), lane(11, 1, &[])]);
        assert!(apply_reorder(&b, &lane_drag(10, 0, 0)).is_none());
        assert!(apply_reorder(&b, &card_drag(100, 10, 0, 10, 0)).is_none());
    }

    #[test]
    fn test_lane_move_to_front() {
        // [A, B, C], move C to index 0 -> [C pos0, A pos1, B pos2]
        let b = board(vec![lane(10, 0, &[]), lane(11, 1, &[]), lane(12, 2, &[])]);
        let (next, mutation) = apply_reorder(&b, &lane_drag(12, 2, 0)).unwrap();

        let ids: Vec<i64> = next.lanes.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![12, 10, 11]);
        let positions: Vec<i64> = next.lanes.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(
            mutation,
            RemoteMutation::ReorderLanes { board_id: 1, lane_order: vec![12, 10, 11] }
        );
        // Input untouched
        assert_eq!(b.lanes[0].id, 10);
        assert_eq!(b.lanes[2].position, 2);
    }

    #[test]
    fn test_lane_positions_are_permutation_for_all_pairs() {
        let n = 4;
        for from in 0..n {
            for to in 0..n {
                if from == to {
                    continue;
                }
                let b = board(
                    (0..n).map(|i| lane(10 + i as i64, i as i64, &[])).collect(),
                );
                let (next, _) = apply_reorder(&b, &lane_drag(10 + from as i64, from, to))
                    .unwrap_or_else(|| panic!("move {} -> {} applied", from, to));
                let positions: Vec<i64> = next.lanes.iter().map(|l| l.position).collect();
                assert_eq!(positions, (0..n as i64).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_card_move_within_lane() {
        let b = board(vec![lane(10, 0, &[100, 101, 102])]);
        let (next, mutation) = apply_reorder(&b, &card_drag(102, 10, 2, 10, 0)).unwrap();

        let ids: Vec<i64> = next.lanes[0].cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![102, 100, 101]);
        for (i, c) in next.lanes[0].cards.iter().enumerate() {
            assert_eq!(c.position, i as i64);
            assert_eq!(c.lane_id, 10);
        }
        match mutation {
            RemoteMutation::MoveCard { card_id, lane_id, position, card_order, source_reorder } => {
                assert_eq!(card_id, 102);
                assert_eq!(lane_id, 10);
                assert_eq!(position, 0);
                assert_eq!(card_order, vec![102, 100, 101]);
                assert!(source_reorder.is_none());
            }
            other => panic!("unexpected mutation {:?}", other),
        }
    }

    #[test]
    fn test_card_move_across_lanes() {
        // Lane A [X, Y], Lane B [] -- move Y to B index 0
        let b = board(vec![lane(10, 0, &[100, 101]), lane(11, 1, &[])]);
        let (next, mutation) = apply_reorder(&b, &card_drag(101, 10, 1, 11, 0)).unwrap();

        assert_eq!(next.lanes[0].cards.len(), 1);
        assert_eq!(next.lanes[0].cards[0].id, 100);
        assert_eq!(next.lanes[0].cards[0].position, 0);

        assert_eq!(next.lanes[1].cards.len(), 1);
        assert_eq!(next.lanes[1].cards[0].id, 101);
        assert_eq!(next.lanes[1].cards[0].position, 0);
        assert_eq!(next.lanes[1].cards[0].lane_id, 11);

        match mutation {
            RemoteMutation::MoveCard { card_id, lane_id, position, card_order, source_reorder } => {
                assert_eq!(card_id, 101);
                assert_eq!(lane_id, 11);
                assert_eq!(position, 0);
                assert_eq!(card_order, vec![101]);
                assert_eq!(source_reorder, Some((10, vec![100])));
            }
            other => panic!("unexpected mutation {:?}", other),
        }
    }

    #[test]
    fn test_cross_lane_positions_contiguous_in_both_lanes() {
        let b = board(vec![lane(10, 0, &[100, 101, 102]), lane(11, 1, &[200, 201])]);
        let (next, _) = apply_reorder(&b, &card_drag(101, 10, 1, 11, 1)).unwrap();

        let source_ids: Vec<i64> = next.lanes[0].cards.iter().map(|c| c.id).collect();
        assert_eq!(source_ids, vec![100, 102]);
        for (i, c) in next.lanes[0].cards.iter().enumerate() {
            assert_eq!(c.position, i as i64);
        }

        let dest_ids: Vec<i64> = next.lanes[1].cards.iter().map(|c| c.id).collect();
        assert_eq!(dest_ids, vec![200, 101, 201]);
        for (i, c) in next.lanes[1].cards.iter().enumerate() {
            assert_eq!(c.position, i as i64);
            assert_eq!(c.lane_id, 11);
        }
    }

    #[test]
    fn test_destination_index_is_after_removal() {
        // Moving the first card to the last slot: with [a, b, c], dropping a
        // at index 2 (post-removal semantics) yields [b, c, a].
        let b = board(vec![lane(10, 0, &[100, 101, 102])]);
        let (next, _) = apply_reorder(&b, &card_drag(100, 10, 0, 10, 2)).unwrap();
        let ids: Vec<i64> = next.lanes[0].cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![101, 102, 100]);
    }

    #[test]
    fn test_stale_drag_is_rejected() {
        let b = board(vec![lane(10, 0, &[100, 101])]);
        // Index points at a different card than the gesture claims
        assert!(apply_reorder(&b, &card_drag(101, 10, 0, 10, 1)).is_none());
        // Unknown lane
        assert!(apply_reorder(&b, &card_drag(100, 99, 0, 10, 1)).is_none());
        // Lane gesture against another board
        let drag = DragResult {
            kind: ItemKind::Lane,
            item_id: 10,
            source: DragLocation { container_id: 2, index: 0 },
            destination: Some(DragLocation { container_id: 2, index: 1 }),
        };
        assert!(apply_reorder(&b, &drag).is_none());
    }

    #[test]
    fn test_input_board_is_not_mutated() {
        let b = board(vec![lane(10, 0, &[100, 101]), lane(11, 1, &[])]);
        let before = b.clone();
        let _ = apply_reorder(&b, &card_drag(101, 10, 1, 11, 0)).unwrap();
        assert_eq!(b, before);
    }
}
