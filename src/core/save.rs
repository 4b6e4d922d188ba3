//! High-level logic for saving a day's entry.

use chrono::NaiveDate;

use crate::auth::Session;
use crate::core::validate::{EntryDraft, validate};
use crate::errors::AppResult;
use crate::models::day_entry::DayEntry;
use crate::store::EntryStore;
use crate::store::repository::EntryRepository;

pub struct SaveLogic;

impl SaveLogic {
    /// Validate the draft and upsert it at (user, date).
    /// Validation failures return before the store is touched, so the
    /// caller can re-present the untouched input.
    pub fn apply<S: EntryStore>(
        repo: &EntryRepository<S>,
        session: &Session,
        date: NaiveDate,
        draft: &EntryDraft,
    ) -> AppResult<DayEntry> {
        let valid = validate(draft)?;
        let entry = repo.save(session.user_id(), date, valid)?;

        tracing::info!(user_id = %session.user_id(), date = %entry.date_str(), "entry saved");
        Ok(entry)
    }
}
