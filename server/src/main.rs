//! Project Board Server Entry Point

use std::net::SocketAddr;
use std::path::PathBuf;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use kanban_server::{api, repository::init_db, AppState};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DB: &str = "kanban.db";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_path = std::env::var("KANBAN_DB").unwrap_or_else(|_| DEFAULT_DB.to_string());
    let port = std::env::var("KANBAN_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let conn = init_db(&PathBuf::from(&db_path))?;
    let state = AppState::new(conn);

    // Permissive CORS so the dev frontend (Trunk on another port) can call us
    let app = api::api_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("serving board API at http://{} (db: {})", addr, db_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
