//! REST API
//!
//! Route table and shared error mapping for the board service. Handlers are
//! organized by entity in the submodules.

mod boards;
mod cards;
mod lanes;


use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};

use crate::domain::DomainError;
use crate::AppState;

// ── Error handling ────────────────────────────────────────────────────

pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::InvalidInput(msg) => ApiError::BadRequest(msg),
            DomainError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                ApiError::Internal(msg)
            }
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/boards", get(boards::list_boards).post(boards::create_board))
        .route(
            "/api/boards/{id}",
            get(boards::get_board)
                .put(boards::update_board)
                .delete(boards::delete_board),
        )
        .route(
            "/api/boards/{id}/lanes",
            get(lanes::get_board_lanes).post(lanes::create_lane),
        )
        .route("/api/boards/{id}/lanes/reorder", put(lanes::reorder_lanes))
        .route(
            "/api/lanes/{id}",
            get(lanes::get_lane).put(lanes::update_lane).delete(lanes::delete_lane),
        )
        .route(
            "/api/lanes/{id}/cards",
            get(cards::get_lane_cards).post(cards::create_card),
        )
        .route("/api/lanes/{id}/cards/reorder", put(cards::reorder_cards))
        .route(
            "/api/cards/{id}",
            get(cards::get_card).put(cards::update_card).delete(cards::delete_card),
        )
        .route("/api/cards/{id}/move", put(cards::move_card))
        .route("/health", get(health_check))
}

async fn health_check() -> &'static str {
    "ok"
}
