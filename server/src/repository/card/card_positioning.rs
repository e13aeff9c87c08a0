//! Card Positioning Operations
//!
//! Position management for cards: append positions, reindexing, full
//! reorder within a lane, and the cross-lane move.

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::domain::{Card, DomainError, DomainResult};

use super::card_repo::{find_card, load_cards_for_lane};

/// Trait for card positioning operations
#[async_trait]
pub trait CardPositioningOperations {
    /// Next free position in a lane (used in create)
    async fn next_position(&self, lane_id: i64) -> DomainResult<i64>;

    /// Reindex a lane's cards to be sequential (0, 1, 2, ...)
    async fn reindex_cards(&self, lane_id: i64) -> DomainResult<()>;

    /// Set every card's position to its index in `card_order` and return the
    /// lane's cards in the new order
    async fn reorder(&self, lane_id: i64, card_order: &[i64]) -> DomainResult<Vec<Card>>;

    /// Move a card to a lane. The target rank comes from the card's index in
    /// `card_order` when supplied, else from `position`, else the end of the
    /// lane. Both the destination and the source lane are reindexed so their
    /// positions stay contiguous.
    async fn move_to(
        &self,
        card_id: i64,
        lane_id: i64,
        position: Option<i64>,
        card_order: Option<&[i64]>,
    ) -> DomainResult<Card>;
}

#[async_trait]
impl CardPositioningOperations for super::card_repo::CardRepository {
    async fn next_position(&self, lane_id: i64) -> DomainResult<i64> {
        let conn = self.conn.lock().await;
        next_card_position(&conn, lane_id)
    }

    async fn reindex_cards(&self, lane_id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        reindex_cards_in(&conn, lane_id)
    }

    async fn reorder(&self, lane_id: i64, card_order: &[i64]) -> DomainResult<Vec<Card>> {
        let conn = self.conn.lock().await;

        // Every id in the new order must be a card of this lane
        let mut stmt = conn.prepare("SELECT id FROM cards WHERE lane_id = ?1")?;
        let existing = stmt
            .query_map(params![lane_id], |row| row.get::<_, i64>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        for id in card_order {
            if !existing.contains(id) {
                return Err(DomainError::InvalidInput(format!(
                    "Card {} does not belong to lane {}",
                    id, lane_id
                )));
            }
        }

        let now = crate::repository::timestamp();
        for (position, id) in card_order.iter().enumerate() {
            conn.execute(
                "UPDATE cards SET position = ?1, updated_at = ?2 WHERE id = ?3",
                params![position as i64, now, id],
            )?;
        }

        load_cards_for_lane(&conn, lane_id)
    }

    async fn move_to(
        &self,
        card_id: i64,
        lane_id: i64,
        position: Option<i64>,
        card_order: Option<&[i64]>,
    ) -> DomainResult<Card> {
        let conn = self.conn.lock().await;

        let source_lane = match find_card(&conn, card_id)? {
            Some(card) => card.lane_id,
            None => return Err(DomainError::NotFound(format!("Card {} not found", card_id))),
        };
        let lane_exists = conn.query_row(
            "SELECT COUNT(*) FROM lanes WHERE id = ?1",
            params![lane_id],
            |row| row.get::<_, i64>(0),
        )? > 0;
        if !lane_exists {
            return Err(DomainError::NotFound(format!("Lane {} not found", lane_id)));
        }

        // Destination order: the client's full list when supplied, otherwise
        // a splice of the lane's current order at the requested rank
        let order: Vec<i64> = match card_order {
            Some(order) => {
                if !order.contains(&card_id) {
                    return Err(DomainError::InvalidInput(format!(
                        "card_order does not contain card {}",
                        card_id
                    )));
                }
                order.to_vec()
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT id FROM cards WHERE lane_id = ?1 AND id != ?2 ORDER BY position, id",
                )?;
                let mut order = stmt
                    .query_map(params![lane_id, card_id], |row| row.get::<_, i64>(0))?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                let index = match position {
                    Some(p) => (p.max(0) as usize).min(order.len()),
                    None => order.len(),
                };
                order.insert(index, card_id);
                order
            }
        };

        conn.execute(
            "UPDATE cards SET lane_id = ?1, updated_at = ?2 WHERE id = ?3",
            params![lane_id, crate::repository::timestamp(), card_id],
        )?;
        for (index, id) in order.iter().enumerate() {
            conn.execute(
                "UPDATE cards SET position = ?1 WHERE id = ?2 AND lane_id = ?3",
                params![index as i64, id, lane_id],
            )?;
        }

        reindex_cards_in(&conn, lane_id)?;
        if source_lane != lane_id {
            reindex_cards_in(&conn, source_lane)?;
        }

        match find_card(&conn, card_id)? {
            Some(card) => Ok(card),
            None => Err(DomainError::NotFound(format!("Card {} not found", card_id))),
        }
    }
}

pub(super) fn next_card_position(conn: &Connection, lane_id: i64) -> DomainResult<i64> {
    let position = conn.query_row(
        "SELECT COALESCE(MAX(position), -1) + 1 FROM cards WHERE lane_id = ?1",
        params![lane_id],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(position)
}

pub(in crate::repository) fn reindex_cards_in(
    conn: &Connection,
    lane_id: i64,
) -> DomainResult<()> {
    let mut stmt =
        conn.prepare("SELECT id FROM cards WHERE lane_id = ?1 ORDER BY position, id")?;
    let ids = stmt
        .query_map(params![lane_id], |row| row.get::<_, i64>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for (position, id) in ids.iter().enumerate() {
        conn.execute(
            "UPDATE cards SET position = ?1 WHERE id = ?2",
            params![position as i64, id],
        )?;
    }
    Ok(())
}
