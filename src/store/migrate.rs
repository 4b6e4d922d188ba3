//! Schema migrations for the bundled SQLite store.
//! Versioned on `PRAGMA user_version`; each step is idempotent and applied
//! in order, so an old database file upgrades in place on open.

use rusqlite::Connection;

use crate::errors::{AppError, AppResult};

const SCHEMA_VERSION: i64 = 1;

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than supported version {}",
            current, SCHEMA_VERSION
        )));
    }

    if current < 1 {
        create_entries_table(conn)?;
        create_log_table(conn)?;
    }

    conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;
    Ok(())
}

fn create_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            date        TEXT NOT NULL,
            names       TEXT NOT NULL,
            location    TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            total_hours REAL NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_user_date ON entries(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_entries_user ON entries(user_id);
        "#,
    )?;
    Ok(())
}

fn create_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
