//! Card Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Card CRUD. Moves and position
//! management are in the `card_positioning` module.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use crate::domain::{Card, CardColor, DomainError, DomainResult};

use super::super::traits::Repository;
use super::card_positioning::{next_card_position, reindex_cards_in};

/// SQLite implementation of Card repository
#[derive(Clone)]
pub struct CardRepository {
    pub(in crate::repository) conn: Arc<Mutex<Connection>>,
}

impl CardRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Create a card in a lane, appended at the end unless a position is given
    pub async fn add(
        &self,
        lane_id: i64,
        title: &str,
        description: Option<&str>,
        color: CardColor,
        position: Option<i64>,
        due_date: Option<&str>,
    ) -> DomainResult<Card> {
        let conn = self.conn.lock().await;

        let position = match position {
            Some(p) => p,
            None => next_card_position(&conn, lane_id)?,
        };
        let now = crate::repository::timestamp();
        conn.execute(
            "INSERT INTO cards (title, description, color, position, due_date, lane_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![title, description, color.as_str(), position, due_date, lane_id, now],
        )?;
        let id = conn.last_insert_rowid();

        match find_card(&conn, id)? {
            Some(card) => Ok(card),
            None => Err(DomainError::Internal(format!("Card {} vanished after insert", id))),
        }
    }

    /// All cards of a lane in position order
    pub async fn list_by_lane(&self, lane_id: i64) -> DomainResult<Vec<Card>> {
        let conn = self.conn.lock().await;
        load_cards_for_lane(&conn, lane_id)
    }
}

#[async_trait]
impl Repository<Card> for CardRepository {
    async fn create(&self, entity: &Card) -> DomainResult<Card> {
        self.add(
            entity.lane_id,
            &entity.title,
            entity.description.as_deref(),
            entity.color,
            Some(entity.position),
            entity.due_date.as_deref(),
        )
        .await
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Card>> {
        let conn = self.conn.lock().await;
        find_card(&conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Card>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(
            "SELECT id, title, description, color, position, due_date, lane_id, created_at, updated_at
             FROM cards ORDER BY lane_id, position, id",
        )?;
        let cards = stmt
            .query_map([], row_to_card)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(cards)
    }

    async fn update(&self, entity: &Card) -> DomainResult<Card> {
        let conn = self.conn.lock().await;

        let changed = conn.execute(
            "UPDATE cards SET title = ?1, description = ?2, color = ?3, position = ?4,
             due_date = ?5, lane_id = ?6, updated_at = ?7 WHERE id = ?8",
            params![
                entity.title,
                entity.description,
                entity.color.as_str(),
                entity.position,
                entity.due_date,
                entity.lane_id,
                crate::repository::timestamp(),
                entity.id
            ],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Card {} not found", entity.id)));
        }

        match find_card(&conn, entity.id)? {
            Some(card) => Ok(card),
            None => Err(DomainError::NotFound(format!("Card {} not found", entity.id))),
        }
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let lane_id = match find_card(&conn, id)? {
            Some(card) => card.lane_id,
            None => return Err(DomainError::NotFound(format!("Card {} not found", id))),
        };

        conn.execute("DELETE FROM cards WHERE id = ?1", params![id])?;

        // Remaining cards stay contiguous
        reindex_cards_in(&conn, lane_id)?;
        Ok(())
    }
}

/// Load a lane's cards in position order
pub(in crate::repository) fn load_cards_for_lane(
    conn: &Connection,
    lane_id: i64,
) -> DomainResult<Vec<Card>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, color, position, due_date, lane_id, created_at, updated_at
         FROM cards WHERE lane_id = ?1 ORDER BY position, id",
    )?;
    let cards = stmt
        .query_map(params![lane_id], row_to_card)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(cards)
}

pub(in crate::repository) fn find_card(conn: &Connection, id: i64) -> DomainResult<Option<Card>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, color, position, due_date, lane_id, created_at, updated_at
         FROM cards WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map(params![id], row_to_card)?;
    match rows.next() {
        Some(card) => Ok(Some(card?)),
        None => Ok(None),
    }
}

/// Convert a database row to Card
pub(super) fn row_to_card(row: &rusqlite::Row<'_>) -> rusqlite::Result<Card> {
    let color: String = row.get(3)?;
    Ok(Card {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        color: CardColor::from_str(&color),
        position: row.get(4)?,
        due_date: row.get(5)?,
        lane_id: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
