//! Bundled SQLite implementation of the document-store boundary.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};

use crate::errors::{AppError, AppResult};
use crate::models::day_entry::{DayEntry, WorkHours};
use crate::store::EntryStore;
use crate::store::log::{recent_log, write_log};
use crate::store::migrate::run_pending_migrations;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory database, used by the test-suite.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Most recent operation-log lines, newest first.
    pub fn recent_log(&self, limit: usize) -> AppResult<Vec<(String, String, String, String)>> {
        recent_log(&self.conn, limit)
    }
}

impl EntryStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<DayEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, user_id, date, names, location, start_time, end_time,
                    total_hours, created_at, updated_at
             FROM entries
             WHERE id = ?1",
        )?;

        let mut rows = stmt.query_map([key], map_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, entry: &DayEntry) -> AppResult<()> {
        let names = serde_json::to_string(&entry.names).map_err(|e| {
            AppError::from(std::io::Error::other(format!(
                "names serialization error: {e}"
            )))
        })?;

        self.conn.execute(
            "INSERT INTO entries (id, user_id, date, names, location, start_time,
                                  end_time, total_hours, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 date = excluded.date,
                 names = excluded.names,
                 location = excluded.location,
                 start_time = excluded.start_time,
                 end_time = excluded.end_time,
                 total_hours = excluded.total_hours,
                 created_at = excluded.created_at,
                 updated_at = excluded.updated_at",
            params![
                key,
                entry.user_id,
                entry.date_str(),
                names,
                entry.location,
                entry.work_hours.start_str(),
                entry.work_hours.end_str(),
                entry.work_hours.total,
                entry.created_at.to_rfc3339(),
                entry.updated_at.to_rfc3339(),
            ],
        )?;

        write_log(&self.conn, "save", key, "entry saved")?;
        tracing::debug!(key, "entry written");
        Ok(())
    }

    fn delete(&self, key: &str) -> AppResult<bool> {
        let removed = self.conn.execute("DELETE FROM entries WHERE id = ?1", [key])?;

        if removed > 0 {
            write_log(&self.conn, "delete", key, "entry deleted")?;
            tracing::debug!(key, "entry deleted");
        }
        Ok(removed > 0)
    }

    fn query_date_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DayEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, user_id, date, names, location, start_time, end_time,
                    total_hours, created_at, updated_at
             FROM entries
             WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
             ORDER BY date ASC",
        )?;

        let from_str = from.format("%Y-%m-%d").to_string();
        let to_str = to.format("%Y-%m-%d").to_string();

        let rows = stmt.query_map(params![user_id, from_str, to_str], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

fn map_row(row: &Row) -> rusqlite::Result<DayEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let names_str: String = row.get("names")?;
    let names: Vec<String> = serde_json::from_str(&names_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(DayEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        names,
        location: row.get("location")?,
        work_hours: WorkHours {
            start: map_time(row, "start_time")?,
            end: map_time(row, "end_time")?,
            total: row.get("total_hours")?,
        },
        created_at: map_timestamp(row, "created_at")?,
        updated_at: map_timestamp(row, "updated_at")?,
    })
}

fn map_time(row: &Row, column: &str) -> rusqlite::Result<NaiveTime> {
    let s: String = row.get(column)?;
    NaiveTime::parse_from_str(&s, "%H:%M").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn map_timestamp(row: &Row, column: &str) -> rusqlite::Result<DateTime<Local>> {
    let s: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}
