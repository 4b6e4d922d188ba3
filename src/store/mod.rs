//! Persistence boundary: the document-store collaborator trait, the bundled
//! SQLite implementation, and the entry repository built on top of it.

pub mod log;
pub mod migrate;
pub mod repository;
pub mod sqlite;

use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::day_entry::DayEntry;

/// Keyed document collection holding day entries.
///
/// This is the entire surface the core requires from the external document
/// store: point get/put/delete by key plus an inclusive date-range query
/// scoped to one user. Any document or relational store with point and
/// range semantics can implement it.
pub trait EntryStore {
    /// Point lookup. Absence is not an error.
    fn get(&self, key: &str) -> AppResult<Option<DayEntry>>;

    /// Full-overwrite upsert at `key`.
    fn put(&self, key: &str, entry: &DayEntry) -> AppResult<()>;

    /// Remove the record at `key`; returns whether a record existed.
    fn delete(&self, key: &str) -> AppResult<bool>;

    /// All of one user's entries with `from <= date <= to`, ascending.
    fn query_date_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DayEntry>>;
}
