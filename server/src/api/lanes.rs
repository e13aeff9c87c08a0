//! Lane Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::domain::Lane;
use crate::repository::{LanePositioningOperations, Repository};
use crate::AppState;

use super::ApiError;

#[derive(Deserialize)]
pub struct CreateLaneRequest {
    pub name: String,
    pub position: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateLaneRequest {
    pub name: Option<String>,
    pub position: Option<i64>,
}

#[derive(Deserialize)]
pub struct ReorderLanesRequest {
    pub lane_order: Vec<i64>,
}

async fn require_board(state: &AppState, board_id: i64) -> Result<(), ApiError> {
    state
        .boards
        .find_by_id(board_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::NotFound(format!("Board {} not found", board_id)))
}

/// List a board's lanes in position order
pub async fn get_board_lanes(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    require_board(&state, board_id).await?;
    let lanes = state.lanes.list_by_board(board_id).await?;
    Ok(Json(lanes))
}

/// Create a lane in a board (appended at the end unless a position is given)
pub async fn create_lane(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
    Json(req): Json<CreateLaneRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_board(&state, board_id).await?;
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Name is required".to_string()));
    }
    let lane = state.lanes.add(board_id, &req.name, req.position).await?;
    tracing::info!(lane_id = lane.id, board_id, "created lane");
    Ok((StatusCode::CREATED, Json(lane)))
}

/// Get a lane with its ordered cards
pub async fn get_lane(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.lanes.find_by_id(id).await? {
        Some(lane) => Ok(Json(lane)),
        None => Err(ApiError::NotFound(format!("Lane {} not found", id))),
    }
}

/// Update a lane's name/position
pub async fn update_lane(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateLaneRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = state
        .lanes
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Lane {} not found", id)))?;

    let merged = Lane {
        name: req.name.unwrap_or(existing.name),
        position: req.position.unwrap_or(existing.position),
        ..existing
    };
    let updated = state.lanes.update(&merged).await?;
    Ok(Json(updated))
}

/// Delete a lane and its cards
pub async fn delete_lane(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.lanes.delete(id).await?;
    tracing::info!(lane_id = id, "deleted lane");
    Ok(StatusCode::NO_CONTENT)
}

/// Reorder a board's lanes from a full id list
pub async fn reorder_lanes(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
    Json(req): Json<ReorderLanesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_board(&state, board_id).await?;
    let lanes = state.lanes.reorder(board_id, &req.lane_order).await?;
    Ok(Json(lanes))
}
