//! Database Connection and Setup
//!
//! Opens the SQLite database and applies migrations.

use std::path::Path;

use rusqlite::Connection;

use crate::domain::{DomainError, DomainResult};

/// Open (or create) the database at the given path and run migrations
pub fn init_db(path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(path)
        .map_err(|e| DomainError::Internal(format!("failed to open database: {}", e)))?;
    configure(&conn)?;
    Ok(conn)
}

/// In-memory database for tests
pub fn init_db_in_memory() -> DomainResult<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| DomainError::Internal(format!("failed to open database: {}", e)))?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_migrations(conn)
}

fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS boards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS lanes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            position INTEGER NOT NULL DEFAULT 0,
            board_id INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            color TEXT NOT NULL DEFAULT 'white',
            position INTEGER NOT NULL DEFAULT 0,
            due_date TEXT,
            lane_id INTEGER NOT NULL REFERENCES lanes(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_lanes_board ON lanes(board_id);
        CREATE INDEX IF NOT EXISTS idx_cards_lane ON cards(lane_id);
        ",
    )?;
    Ok(())
}
