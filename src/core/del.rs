//! High-level logic for deleting a day's entry.

use chrono::NaiveDate;

use crate::auth::Session;
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use crate::store::repository::EntryRepository;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the entry at (user, date).
    ///
    /// Returns `true` when a record was removed and `false` when none
    /// existed ("already gone"). Store failures still propagate.
    pub fn apply<S: EntryStore>(
        repo: &EntryRepository<S>,
        session: &Session,
        date: NaiveDate,
    ) -> AppResult<bool> {
        match repo.delete(session.user_id(), date) {
            Ok(()) => {
                tracing::info!(user_id = %session.user_id(), date = %date, "entry deleted");
                Ok(true)
            }
            Err(AppError::NotFound(key)) => {
                tracing::debug!(key = %key, "delete requested for absent entry");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
