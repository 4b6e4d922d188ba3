//! Entry repository: keyed CRUD over the document-store boundary.
//! Enforces the one-entry-per-user-per-date key scheme and the
//! created_at/updated_at stamping rules; everything else is delegated to
//! the underlying store.

use chrono::{Local, NaiveDate};

use crate::core::validate::ValidEntry;
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::store::EntryStore;
use crate::utils::date::month_bounds;

pub struct EntryRepository<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Point lookup by (user, date). Absence is not an error.
    pub fn get(&self, user_id: &str, date: NaiveDate) -> AppResult<Option<DayEntry>> {
        self.store.get(&DayEntry::key(user_id, date))
    }

    /// Idempotent upsert at the composite key.
    ///
    /// When a record already exists its `created_at` is fetched and carried
    /// forward; `updated_at` is always refreshed. The read-modify-write is
    /// not transactional: writes are single-user and serialized by user
    /// interaction, so a stale `created_at` between two racing saves is
    /// accepted.
    pub fn save(&self, user_id: &str, date: NaiveDate, valid: ValidEntry) -> AppResult<DayEntry> {
        let key = DayEntry::key(user_id, date);
        let prior = self.store.get(&key)?;

        let now = Local::now();
        let created_at = match prior {
            Some(existing) => existing.created_at,
            None => now,
        };

        let entry = DayEntry {
            id: key.clone(),
            date,
            names: valid.names,
            location: valid.location,
            work_hours: valid.hours,
            user_id: user_id.to_string(),
            created_at,
            updated_at: now,
        };

        self.store.put(&key, &entry)?;
        Ok(entry)
    }

    /// Remove the entry at (user, date). Surfaces `NotFound` for an absent
    /// key; flow-level callers decide whether that matters.
    pub fn delete(&self, user_id: &str, date: NaiveDate) -> AppResult<()> {
        let key = DayEntry::key(user_id, date);
        if self.store.delete(&key)? {
            Ok(())
        } else {
            Err(AppError::NotFound(key))
        }
    }

    /// All entries of one user within the calendar month, ascending by date.
    pub fn query_by_month(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<DayEntry>> {
        let (first, last) = month_bounds(year, month)?;
        self.store.query_date_range(user_id, first, last)
    }
}
