//! Card API Calls

use reqwest::Method;
use serde::Serialize;

use super::{request_json, request_no_content, ApiError};
use crate::models::{Card, CardColor};

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub color: CardColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
}

#[derive(Serialize)]
pub struct UpdateCardArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CardColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<&'a str>>,
}

pub async fn get_lane_cards(lane_id: i64) -> Result<Vec<Card>, ApiError> {
    request_json(Method::GET, &format!("/lanes/{}/cards", lane_id), None).await
}

pub async fn create_card(lane_id: i64, args: &CreateCardArgs<'_>) -> Result<Card, ApiError> {
    let body = serde_json::to_value(args).map_err(|e| ApiError::Transport(e.to_string()))?;
    request_json(Method::POST, &format!("/lanes/{}/cards", lane_id), Some(body)).await
}

pub async fn update_card(id: i64, args: &UpdateCardArgs<'_>) -> Result<Card, ApiError> {
    let body = serde_json::to_value(args).map_err(|e| ApiError::Transport(e.to_string()))?;
    request_json(Method::PUT, &format!("/cards/{}", id), Some(body)).await
}

pub async fn delete_card(id: i64) -> Result<(), ApiError> {
    request_no_content(Method::DELETE, &format!("/cards/{}", id)).await
}

/// Move a card to a lane at a position. `card_order` carries the destination
/// lane's full card-id order so the server can assign positions from it.
pub async fn move_card(
    card_id: i64,
    lane_id: i64,
    position: i64,
    card_order: &[i64],
) -> Result<Card, ApiError> {
    let body = serde_json::json!({
        "lane_id": lane_id,
        "position": position,
        "card_order": card_order,
    });
    request_json(Method::PUT, &format!("/cards/{}/move", card_id), Some(body)).await
}

pub async fn reorder_cards(lane_id: i64, card_order: &[i64]) -> Result<Vec<Card>, ApiError> {
    let body = serde_json::json!({ "card_order": card_order });
    request_json(Method::PUT, &format!("/lanes/{}/cards/reorder", lane_id), Some(body)).await
}
