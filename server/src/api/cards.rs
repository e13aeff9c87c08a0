//! Card Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::domain::{Card, CardColor};
use crate::repository::{CardPositioningOperations, Repository};
use crate::AppState;

use super::ApiError;

#[derive(Deserialize)]
pub struct CreateCardRequest {
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub position: Option<i64>,
    pub due_date: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub position: Option<i64>,
    pub lane_id: Option<i64>,
    /// Missing = leave unchanged, null = clear, value = set
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<String>>,
}

/// Keeps "field: null" distinguishable from an absent field
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct MoveCardRequest {
    pub lane_id: i64,
    pub position: Option<i64>,
    pub card_order: Option<Vec<i64>>,
}

#[derive(Deserialize)]
pub struct ReorderCardsRequest {
    pub card_order: Vec<i64>,
}

async fn require_lane(state: &AppState, lane_id: i64) -> Result<(), ApiError> {
    state
        .lanes
        .find_by_id(lane_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::NotFound(format!("Lane {} not found", lane_id)))
}

/// List a lane's cards in position order
pub async fn get_lane_cards(
    State(state): State<AppState>,
    Path(lane_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    require_lane(&state, lane_id).await?;
    let cards = state.cards.list_by_lane(lane_id).await?;
    Ok(Json(cards))
}

/// Create a card in a lane (appended at the end unless a position is given)
pub async fn create_card(
    State(state): State<AppState>,
    Path(lane_id): Path<i64>,
    Json(req): Json<CreateCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_lane(&state, lane_id).await?;
    if req.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Title is required".to_string()));
    }
    let color = req.color.as_deref().map(CardColor::from_str).unwrap_or_default();
    let card = state
        .cards
        .add(
            lane_id,
            &req.title,
            req.description.as_deref(),
            color,
            req.position,
            req.due_date.as_deref(),
        )
        .await?;
    tracing::info!(card_id = card.id, lane_id, "created card");
    Ok((StatusCode::CREATED, Json(card)))
}

/// Get a card by ID
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.cards.find_by_id(id).await? {
        Some(card) => Ok(Json(card)),
        None => Err(ApiError::NotFound(format!("Card {} not found", id))),
    }
}

/// Update a card's fields
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = state
        .cards
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Card {} not found", id)))?;

    let merged = Card {
        title: req.title.unwrap_or(existing.title),
        description: match req.description {
            Some(d) if d.is_empty() => None,
            Some(d) => Some(d),
            None => existing.description,
        },
        color: req
            .color
            .as_deref()
            .map(CardColor::from_str)
            .unwrap_or(existing.color),
        position: req.position.unwrap_or(existing.position),
        lane_id: req.lane_id.unwrap_or(existing.lane_id),
        due_date: match req.due_date {
            Some(due) => due,
            None => existing.due_date,
        },
        id: existing.id,
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };
    let updated = state.cards.update(&merged).await?;
    Ok(Json(updated))
}

/// Delete a card
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.cards.delete(id).await?;
    tracing::info!(card_id = id, "deleted card");
    Ok(StatusCode::NO_CONTENT)
}

/// Move a card to a lane, positions assigned from `card_order` when supplied
pub async fn move_card(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<MoveCardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let card = state
        .cards
        .move_to(id, req.lane_id, req.position, req.card_order.as_deref())
        .await?;
    tracing::info!(card_id = id, lane_id = req.lane_id, "moved card");
    Ok(Json(card))
}

/// Reorder a lane's cards from a full id list
pub async fn reorder_cards(
    State(state): State<AppState>,
    Path(lane_id): Path<i64>,
    Json(req): Json<ReorderCardsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_lane(&state, lane_id).await?;
    let cards = state.cards.reorder(lane_id, &req.card_order).await?;
    Ok(Json(cards))
}
