//! Board Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::domain::Board;
use crate::repository::Repository;
use crate::AppState;

use super::ApiError;

#[derive(Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateBoardRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// List all boards (summary form, no nested lanes)
pub async fn list_boards(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let boards = state.boards.list().await?;
    Ok(Json(boards))
}

/// Create a board with the default lanes
pub async fn create_board(
    State(state): State<AppState>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Name is required".to_string()));
    }
    let board = state
        .boards
        .create(&Board::new(0, req.name, req.description))
        .await?;
    tracing::info!(board_id = board.id, "created board");
    Ok((StatusCode::CREATED, Json(board)))
}

/// Get a board with its ordered lanes and cards
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.boards.get_detail(id).await? {
        Some(detail) => Ok(Json(detail)),
        None => Err(ApiError::NotFound(format!("Board {} not found", id))),
    }
}

/// Update a board's name/description
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBoardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = state
        .boards
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Board {} not found", id)))?;

    let merged = Board {
        id: existing.id,
        name: req.name.unwrap_or(existing.name),
        description: req.description.unwrap_or(existing.description),
    };
    let updated = state.boards.update(&merged).await?;
    Ok(Json(updated))
}

/// Delete a board and everything in it
pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.boards.delete(id).await?;
    tracing::info!(board_id = id, "deleted board");
    Ok(StatusCode::NO_CONTENT)
}
