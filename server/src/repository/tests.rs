//! Repository Integration Tests
//!
//! Exercises the repositories against an in-memory SQLite database.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Board, CardColor, DomainError};
use crate::repository::{
    init_db_in_memory, BoardRepository, CardPositioningOperations, CardRepository,
    LanePositioningOperations, LaneRepository, Repository,
};

fn setup() -> (BoardRepository, LaneRepository, CardRepository) {
    let conn = Arc::new(Mutex::new(init_db_in_memory().expect("Failed to init test DB")));
    (
        BoardRepository::new(conn.clone()),
        LaneRepository::new(conn.clone()),
        CardRepository::new(conn),
    )
}

async fn seed_board(boards: &BoardRepository) -> Board {
    boards
        .create(&Board::new(0, "Project".to_string(), "Test board".to_string()))
        .await
        .expect("Failed to create board")
}

#[tokio::test]
async fn test_create_board_seeds_default_lanes() {
    let (boards, _, _) = setup();

    let board = seed_board(&boards).await;
    assert!(board.id > 0);

    let detail = boards.get_detail(board.id).await.unwrap().unwrap();
    let names: Vec<&str> = detail.lanes.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["To Do", "In Progress", "Done"]);
    let positions: Vec<i64> = detail.lanes.iter().map(|l| l.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_board_update_and_delete() {
    let (boards, _, _) = setup();

    let mut board = seed_board(&boards).await;
    board.name = "Renamed".to_string();
    let updated = boards.update(&board).await.unwrap();
    assert_eq!(updated.name, "Renamed");

    boards.delete(board.id).await.unwrap();
    assert!(boards.find_by_id(board.id).await.unwrap().is_none());
    // Lanes went with the board
    let lanes = boards.get_detail(board.id).await.unwrap();
    assert!(lanes.is_none());
}

#[tokio::test]
async fn test_lane_add_appends_at_end() {
    let (boards, lanes, _) = setup();
    let board = seed_board(&boards).await;

    let lane = lanes.add(board.id, "Review", None).await.unwrap();
    assert_eq!(lane.position, 3);
}

#[tokio::test]
async fn test_lane_delete_reindexes_remaining() {
    let (boards, lanes, _) = setup();
    let board = seed_board(&boards).await;
    let all = lanes.list_by_board(board.id).await.unwrap();

    lanes.delete(all[1].id).await.unwrap();

    let remaining = lanes.list_by_board(board.id).await.unwrap();
    assert_eq!(remaining.len(), 2);
    let positions: Vec<i64> = remaining.iter().map(|l| l.position).collect();
    assert_eq!(positions, vec![0, 1]);
}

#[tokio::test]
async fn test_lane_reorder_sets_positions_from_order() {
    let (boards, lanes, _) = setup();
    let board = seed_board(&boards).await;
    let all = lanes.list_by_board(board.id).await.unwrap();
    let (a, b, c) = (all[0].id, all[1].id, all[2].id);

    let reordered = lanes.reorder(board.id, &[c, a, b]).await.unwrap();

    let ids: Vec<i64> = reordered.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![c, a, b]);
    let positions: Vec<i64> = reordered.iter().map(|l| l.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_lane_reorder_rejects_foreign_lane() {
    let (boards, lanes, _) = setup();
    let board = seed_board(&boards).await;
    let other = seed_board(&boards).await;
    let foreign = lanes.list_by_board(other.id).await.unwrap()[0].id;
    let own = lanes.list_by_board(board.id).await.unwrap()[0].id;

    let err = lanes.reorder(board.id, &[own, foreign]).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn test_card_add_positions_are_sequential() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let lane = lanes.list_by_board(board.id).await.unwrap()[0].id;

    let first = cards
        .add(lane, "First", None, CardColor::White, None, None)
        .await
        .unwrap();
    let second = cards
        .add(lane, "Second", Some("With text"), CardColor::Blue, None, None)
        .await
        .unwrap();

    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_eq!(second.color, CardColor::Blue);
}

#[tokio::test]
async fn test_card_delete_reindexes_lane() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let lane = lanes.list_by_board(board.id).await.unwrap()[0].id;

    let a = cards.add(lane, "A", None, CardColor::White, None, None).await.unwrap();
    let b = cards.add(lane, "B", None, CardColor::White, None, None).await.unwrap();
    let c = cards.add(lane, "C", None, CardColor::White, None, None).await.unwrap();

    cards.delete(b.id).await.unwrap();

    let remaining = cards.list_by_lane(lane).await.unwrap();
    let ids: Vec<i64> = remaining.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
    let positions: Vec<i64> = remaining.iter().map(|card| card.position).collect();
    assert_eq!(positions, vec![0, 1]);
}

#[tokio::test]
async fn test_move_card_across_lanes_with_order() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let all = lanes.list_by_board(board.id).await.unwrap();
    let (src, dst) = (all[0].id, all[1].id);

    let x = cards.add(src, "X", None, CardColor::White, None, None).await.unwrap();
    let y = cards.add(src, "Y", None, CardColor::White, None, None).await.unwrap();

    let moved = cards.move_to(y.id, dst, None, Some(&[y.id])).await.unwrap();
    assert_eq!(moved.lane_id, dst);
    assert_eq!(moved.position, 0);

    let source_cards = cards.list_by_lane(src).await.unwrap();
    assert_eq!(source_cards.len(), 1);
    assert_eq!(source_cards[0].id, x.id);
    assert_eq!(source_cards[0].position, 0);

    let dest_cards = cards.list_by_lane(dst).await.unwrap();
    assert_eq!(dest_cards.len(), 1);
    assert_eq!(dest_cards[0].id, y.id);
}

#[tokio::test]
async fn test_move_card_with_position_shifts_neighbors() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let all = lanes.list_by_board(board.id).await.unwrap();
    let (src, dst) = (all[0].id, all[1].id);

    let a = cards.add(dst, "A", None, CardColor::White, None, None).await.unwrap();
    let b = cards.add(dst, "B", None, CardColor::White, None, None).await.unwrap();
    let m = cards.add(src, "M", None, CardColor::White, None, None).await.unwrap();

    let moved = cards.move_to(m.id, dst, Some(1), None).await.unwrap();
    assert_eq!(moved.position, 1);

    let dest_cards = cards.list_by_lane(dst).await.unwrap();
    let ids: Vec<i64> = dest_cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![a.id, m.id, b.id]);
    let positions: Vec<i64> = dest_cards.iter().map(|card| card.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_move_card_within_lane_uses_post_removal_rank() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let lane = lanes.list_by_board(board.id).await.unwrap()[0].id;

    let a = cards.add(lane, "A", None, CardColor::White, None, None).await.unwrap();
    let b = cards.add(lane, "B", None, CardColor::White, None, None).await.unwrap();
    let c = cards.add(lane, "C", None, CardColor::White, None, None).await.unwrap();

    // [A, B, C], moving A to rank 2 means "after removal": [B, C, A]
    let moved = cards.move_to(a.id, lane, Some(2), None).await.unwrap();
    assert_eq!(moved.position, 2);

    let all = cards.list_by_lane(lane).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![b.id, c.id, a.id]);
}

#[tokio::test]
async fn test_move_card_defaults_to_end_of_lane() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let all = lanes.list_by_board(board.id).await.unwrap();
    let (src, dst) = (all[0].id, all[1].id);

    cards.add(dst, "A", None, CardColor::White, None, None).await.unwrap();
    let m = cards.add(src, "M", None, CardColor::White, None, None).await.unwrap();

    let moved = cards.move_to(m.id, dst, None, None).await.unwrap();
    assert_eq!(moved.position, 1);
}

#[tokio::test]
async fn test_move_unknown_card_is_not_found() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let lane = lanes.list_by_board(board.id).await.unwrap()[0].id;

    let err = cards.move_to(999, lane, Some(0), None).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_reorder_cards_within_lane() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let lane = lanes.list_by_board(board.id).await.unwrap()[0].id;

    let a = cards.add(lane, "A", None, CardColor::White, None, None).await.unwrap();
    let b = cards.add(lane, "B", None, CardColor::White, None, None).await.unwrap();

    let reordered = cards.reorder(lane, &[b.id, a.id]).await.unwrap();
    let ids: Vec<i64> = reordered.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    let positions: Vec<i64> = reordered.iter().map(|card| card.position).collect();
    assert_eq!(positions, vec![0, 1]);
}

#[tokio::test]
async fn test_update_card_persists_fields() {
    let (boards, lanes, cards) = setup();
    let board = seed_board(&boards).await;
    let lane = lanes.list_by_board(board.id).await.unwrap()[0].id;

    let mut card = cards
        .add(lane, "Original", None, CardColor::White, None, None)
        .await
        .unwrap();
    card.title = "Updated".to_string();
    card.description = Some("Now with text".to_string());
    card.color = CardColor::Green;
    card.due_date = Some("2026-09-01".to_string());

    let updated = cards.update(&card).await.unwrap();
    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.description.as_deref(), Some("Now with text"));
    assert_eq!(updated.color, CardColor::Green);
    assert_eq!(updated.due_date.as_deref(), Some("2026-09-01"));
}
