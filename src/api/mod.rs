//! REST API Client
//!
//! Frontend bindings to the board service, organized by entity. All requests
//! go through [`request_json`]/[`request_no_content`], which retry transport
//! failures and 5xx responses with a fixed delay before surfacing an error.
//! 4xx responses are surfaced immediately.

mod boards;
mod cards;
mod lanes;

use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

pub use boards::*;
pub use cards::*;
pub use lanes::*;

/// Total attempts per request, including the first
const RETRY_LIMIT: u32 = 3;
/// Fixed delay between attempts
const RETRY_DELAY_MS: u32 = 500;

/// API call failure after retries are exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success HTTP status with the response body
    Status(u16, String),
    /// No response (network failure, malformed body)
    Transport(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status(code, msg) if msg.is_empty() => write!(f, "HTTP {}", code),
            ApiError::Status(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

/// Resolve the API base URL. Served pages talk to their own origin; the dev
/// setup (Trunk on one port, server on 8000) goes through localhost.
fn api_base() -> String {
    let on_localhost = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .map(|h| h == "localhost" || h == "127.0.0.1")
        .unwrap_or(true);
    if on_localhost {
        "http://localhost:8000/api".to_string()
    } else {
        "/api".to_string()
    }
}

async fn send(
    method: reqwest::Method,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<reqwest::Response, ApiError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let client = reqwest::Client::new();
        let mut req = client.request(method.clone(), url);
        if let Some(body) = body {
            req = req.json(body);
        }
        match req.send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_server_error() && attempt < RETRY_LIMIT {
                    TimeoutFuture::new(RETRY_DELAY_MS).await;
                    continue;
                }
                if !status.is_success() {
                    let code = status.as_u16();
                    let message = resp.text().await.unwrap_or_default();
                    return Err(ApiError::Status(code, message));
                }
                return Ok(resp);
            }
            Err(e) => {
                if attempt < RETRY_LIMIT {
                    TimeoutFuture::new(RETRY_DELAY_MS).await;
                    continue;
                }
                return Err(ApiError::Transport(e.to_string()));
            }
        }
    }
}

/// Issue a request and deserialize the JSON response
pub(crate) async fn request_json<T: DeserializeOwned>(
    method: reqwest::Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let url = format!("{}{}", api_base(), path);
    let resp = send(method, &url, body.as_ref()).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Issue a request and discard the response body (delete endpoints)
pub(crate) async fn request_no_content(
    method: reqwest::Method,
    path: &str,
) -> Result<(), ApiError> {
    let url = format!("{}{}", api_base(), path);
    send(method, &url, None).await.map(|_| ())
}
