//! Board Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Board CRUD. A new board is seeded with
//! the default lanes. Deleting a board cascades to its lanes and cards.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use crate::domain::{Board, BoardDetail, DomainError, DomainResult, DEFAULT_LANES};

use super::lane::load_lanes_for_board;
use super::traits::Repository;

/// SQLite implementation of Board repository
#[derive(Clone)]
pub struct BoardRepository {
    pub(super) conn: Arc<Mutex<Connection>>,
}

impl BoardRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Load a board with its ordered lanes, each with its ordered cards
    pub async fn get_detail(&self, id: i64) -> DomainResult<Option<BoardDetail>> {
        let conn = self.conn.lock().await;

        let board = find_board(&conn, id)?;
        match board {
            Some(board) => {
                let lanes = load_lanes_for_board(&conn, board.id)?;
                Ok(Some(BoardDetail { board, lanes }))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Repository<Board> for BoardRepository {
    async fn create(&self, entity: &Board) -> DomainResult<Board> {
        let conn = self.conn.lock().await;

        let now = super::timestamp();
        conn.execute(
            "INSERT INTO boards (name, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            params![entity.name, entity.description, now],
        )?;
        let board_id = conn.last_insert_rowid();

        // Every new board starts with the default lanes
        for (position, name) in DEFAULT_LANES.iter().enumerate() {
            conn.execute(
                "INSERT INTO lanes (name, board_id, position) VALUES (?1, ?2, ?3)",
                params![name, board_id, position as i64],
            )?;
        }

        Ok(Board::new(board_id, entity.name.clone(), entity.description.clone()))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Board>> {
        let conn = self.conn.lock().await;
        find_board(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Board>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT id, name, description FROM boards ORDER BY id")?;
        let boards = stmt
            .query_map([], row_to_board)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(boards)
    }

    async fn update(&self, entity: &Board) -> DomainResult<Board> {
        let conn = self.conn.lock().await;

        let changed = conn.execute(
            "UPDATE boards SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4",
            params![entity.name, entity.description, super::timestamp(), entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Board {} not found", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        // Lanes and cards go with the board via FK cascade
        let changed = conn.execute("DELETE FROM boards WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Board {} not found", id)));
        }
        Ok(())
    }
}

fn find_board(conn: &Connection, id: i64) -> DomainResult<Option<Board>> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM boards WHERE id = ?1")?;
    let mut rows = stmt.query_map(params![id], row_to_board)?;
    match rows.next() {
        Some(board) => Ok(Some(board?)),
        None => Ok(None),
    }
}

fn row_to_board(row: &rusqlite::Row<'_>) -> rusqlite::Result<Board> {
    Ok(Board::new(row.get(0)?, row.get(1)?, row.get(2)?))
}
