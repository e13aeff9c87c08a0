//! Lane API Calls

use reqwest::Method;
use serde::Serialize;

use super::{request_json, request_no_content, ApiError};
use crate::models::Lane;

#[derive(Serialize)]
pub struct UpdateLaneArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

pub async fn create_lane(board_id: i64, name: &str, position: Option<i64>) -> Result<Lane, ApiError> {
    let body = serde_json::json!({ "name": name, "position": position });
    request_json(Method::POST, &format!("/boards/{}/lanes", board_id), Some(body)).await
}

pub async fn update_lane(id: i64, args: &UpdateLaneArgs<'_>) -> Result<Lane, ApiError> {
    let body = serde_json::to_value(args).map_err(|e| ApiError::Transport(e.to_string()))?;
    request_json(Method::PUT, &format!("/lanes/{}", id), Some(body)).await
}

pub async fn delete_lane(id: i64) -> Result<(), ApiError> {
    request_no_content(Method::DELETE, &format!("/lanes/{}", id)).await
}

pub async fn reorder_lanes(board_id: i64, lane_order: &[i64]) -> Result<Vec<Lane>, ApiError> {
    let body = serde_json::json!({ "lane_order": lane_order });
    request_json(Method::PUT, &format!("/boards/{}/lanes/reorder", board_id), Some(body)).await
}
