//! Lane Positioning Operations
//!
//! Position management for lanes within a board: append positions, reindex
//! to a contiguous 0-based sequence, and full reorder from an id list.

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::domain::{DomainError, DomainResult, Lane};

use super::lane_repo::load_lanes_for_board;

/// Trait for lane positioning operations
#[async_trait]
pub trait LanePositioningOperations {
    /// Next free position in a board (used in create)
    async fn next_position(&self, board_id: i64) -> DomainResult<i64>;

    /// Reindex a board's lanes to be sequential (0, 1, 2, ...)
    async fn reindex_lanes(&self, board_id: i64) -> DomainResult<()>;

    /// Set every lane's position to its index in `lane_order` and return the
    /// board's lanes in the new order
    async fn reorder(&self, board_id: i64, lane_order: &[i64]) -> DomainResult<Vec<Lane>>;
}

#[async_trait]
impl LanePositioningOperations for super::lane_repo::LaneRepository {
    async fn next_position(&self, board_id: i64) -> DomainResult<i64> {
        let conn = self.conn.lock().await;
        next_lane_position(&conn, board_id)
    }

    async fn reindex_lanes(&self, board_id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        reindex_lanes_in(&conn, board_id)
    }

    async fn reorder(&self, board_id: i64, lane_order: &[i64]) -> DomainResult<Vec<Lane>> {
        let conn = self.conn.lock().await;

        // Every id in the new order must be a lane of this board
        let mut stmt = conn.prepare("SELECT id FROM lanes WHERE board_id = ?1")?;
        let existing = stmt
            .query_map(params![board_id], |row| row.get::<_, i64>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        for id in lane_order {
            if !existing.contains(id) {
                return Err(DomainError::InvalidInput(format!(
                    "Lane {} does not belong to board {}",
                    id, board_id
                )));
            }
        }

        let now = crate::repository::timestamp();
        for (position, id) in lane_order.iter().enumerate() {
            conn.execute(
                "UPDATE lanes SET position = ?1, updated_at = ?2 WHERE id = ?3",
                params![position as i64, now, id],
            )?;
        }

        load_lanes_for_board(&conn, board_id)
    }
}

pub(super) fn next_lane_position(conn: &Connection, board_id: i64) -> DomainResult<i64> {
    let position = conn.query_row(
        "SELECT COALESCE(MAX(position), -1) + 1 FROM lanes WHERE board_id = ?1",
        params![board_id],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(position)
}

pub(in crate::repository) fn reindex_lanes_in(
    conn: &Connection,
    board_id: i64,
) -> DomainResult<()> {
    let mut stmt =
        conn.prepare("SELECT id FROM lanes WHERE board_id = ?1 ORDER BY position, id")?;
    let ids = stmt
        .query_map(params![board_id], |row| row.get::<_, i64>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for (position, id) in ids.iter().enumerate() {
        conn.execute(
            "UPDATE lanes SET position = ?1 WHERE id = ?2",
            params![position as i64, id],
        )?;
    }
    Ok(())
}
