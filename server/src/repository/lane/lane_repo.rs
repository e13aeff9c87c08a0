//! Lane Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Lane CRUD. Position management lives in
//! the `lane_positioning` module. Lane reads always carry the lane's ordered
//! cards so responses are usable as full snapshots.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Lane};

use super::super::card::load_cards_for_lane;
use super::super::traits::Repository;
use super::lane_positioning::{next_lane_position, reindex_lanes_in};

/// SQLite implementation of Lane repository
#[derive(Clone)]
pub struct LaneRepository {
    pub(in crate::repository) conn: Arc<Mutex<Connection>>,
}

impl LaneRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Create a lane in a board, appended at the end unless a position is given
    pub async fn add(
        &self,
        board_id: i64,
        name: &str,
        position: Option<i64>,
    ) -> DomainResult<Lane> {
        let conn = self.conn.lock().await;

        let position = match position {
            Some(p) => p,
            None => next_lane_position(&conn, board_id)?,
        };
        let now = crate::repository::timestamp();
        conn.execute(
            "INSERT INTO lanes (name, board_id, position, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
            params![name, board_id, position, now],
        )?;
        let id = conn.last_insert_rowid();

        Ok(Lane::new(id, name.to_string(), board_id, position))
    }

    /// All lanes of a board in position order, cards included
    pub async fn list_by_board(&self, board_id: i64) -> DomainResult<Vec<Lane>> {
        let conn = self.conn.lock().await;
        load_lanes_for_board(&conn, board_id)
    }
}

#[async_trait]
impl Repository<Lane> for LaneRepository {
    async fn create(&self, entity: &Lane) -> DomainResult<Lane> {
        self.add(entity.board_id, &entity.name, Some(entity.position)).await
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Lane>> {
        let conn = self.conn.lock().await;
        find_lane(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Lane>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(
            "SELECT id, name, position, board_id FROM lanes ORDER BY board_id, position, id",
        )?;
        let mut lanes = stmt
            .query_map([], row_to_lane)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        for lane in lanes.iter_mut() {
            lane.cards = load_cards_for_lane(&conn, lane.id)?;
        }
        Ok(lanes)
    }

    async fn update(&self, entity: &Lane) -> DomainResult<Lane> {
        let conn = self.conn.lock().await;

        let changed = conn.execute(
            "UPDATE lanes SET name = ?1, position = ?2, updated_at = ?3 WHERE id = ?4",
            params![entity.name, entity.position, crate::repository::timestamp(), entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Lane {} not found", entity.id)));
        }

        let mut lane = entity.clone();
        lane.cards = load_cards_for_lane(&conn, lane.id)?;
        Ok(lane)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let board_id = match find_lane(&conn, id)? {
            Some(lane) => lane.board_id,
            None => return Err(DomainError::NotFound(format!("Lane {} not found", id))),
        };

        // Cards go with the lane via FK cascade
        conn.execute("DELETE FROM lanes WHERE id = ?1", params![id])?;

        // Remaining lanes stay contiguous
        reindex_lanes_in(&conn, board_id)?;
        Ok(())
    }
}

/// Load a board's lanes in position order, each with its ordered cards
pub(in crate::repository) fn load_lanes_for_board(
    conn: &Connection,
    board_id: i64,
) -> DomainResult<Vec<Lane>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, position, board_id FROM lanes WHERE board_id = ?1 ORDER BY position, id",
    )?;
    let mut lanes = stmt
        .query_map(params![board_id], row_to_lane)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    for lane in lanes.iter_mut() {
        lane.cards = load_cards_for_lane(conn, lane.id)?;
    }
    Ok(lanes)
}

pub(in crate::repository) fn find_lane(conn: &Connection, id: i64) -> DomainResult<Option<Lane>> {
    let mut stmt =
        conn.prepare("SELECT id, name, position, board_id FROM lanes WHERE id = ?1")?;
    let mut rows = stmt.query_map(params![id], row_to_lane)?;
    match rows.next() {
        Some(lane) => {
            let mut lane = lane?;
            lane.cards = load_cards_for_lane(conn, lane.id)?;
            Ok(Some(lane))
        }
        None => Ok(None),
    }
}

/// Convert a database row to Lane (cards loaded separately)
pub(super) fn row_to_lane(row: &rusqlite::Row<'_>) -> rusqlite::Result<Lane> {
    Ok(Lane::new(row.get(0)?, row.get(1)?, row.get(3)?, row.get(2)?))
}
