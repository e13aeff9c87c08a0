//! Board API Calls

use reqwest::Method;
use serde::Serialize;

use super::{request_json, request_no_content, ApiError};
use crate::models::{Board, BoardSummary};

#[derive(Serialize)]
pub struct UpdateBoardArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

pub async fn get_boards() -> Result<Vec<BoardSummary>, ApiError> {
    request_json(Method::GET, "/boards", None).await
}

pub async fn get_board(id: i64) -> Result<Board, ApiError> {
    request_json(Method::GET, &format!("/boards/{}", id), None).await
}

pub async fn create_board(name: &str, description: &str) -> Result<BoardSummary, ApiError> {
    let body = serde_json::json!({ "name": name, "description": description });
    request_json(Method::POST, "/boards", Some(body)).await
}

pub async fn update_board(id: i64, args: &UpdateBoardArgs<'_>) -> Result<BoardSummary, ApiError> {
    let body = serde_json::to_value(args).map_err(|e| ApiError::Transport(e.to_string()))?;
    request_json(Method::PUT, &format!("/boards/{}", id), Some(body)).await
}

pub async fn delete_board(id: i64) -> Result<(), ApiError> {
    request_no_content(Method::DELETE, &format!("/boards/{}", id)).await
}
