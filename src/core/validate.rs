//! Validation of a candidate day entry before it touches the store.

use chrono::NaiveTime;

use crate::core::hours::{compute_hours, parse_time};
use crate::errors::ValidationError;
use crate::models::day_entry::WorkHours;

/// Raw form input for one day: names as typed (blanks allowed), free-text
/// location, optional start/end times.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub names: Vec<String>,
    pub location: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A draft that passed every check, with trimmed text fields and the
/// derived total attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub names: Vec<String>,
    pub location: String,
    pub hours: WorkHours,
}

/// Validate a draft. Checks run in a fixed order and the first failure
/// wins; nothing is accumulated.
pub fn validate(draft: &EntryDraft) -> Result<ValidEntry, ValidationError> {
    let names: Vec<String> = draft
        .names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(ValidationError::NoNames);
    }

    let location = draft.location.trim();
    if location.is_empty() {
        return Err(ValidationError::NoLocation);
    }

    let (start, end) = match (&draft.start, &draft.end) {
        (Some(s), Some(e)) => (s.as_str(), e.as_str()),
        _ => return Err(ValidationError::MissingTime),
    };

    let start_minutes = parse_time(start)?;
    let end_minutes = parse_time(end)?;

    let total = compute_hours(start, end)?;
    if total <= 0.0 {
        return Err(ValidationError::NonPositiveDuration);
    }

    Ok(ValidEntry {
        names,
        location: location.to_string(),
        hours: WorkHours {
            start: minutes_to_time(start_minutes, start)?,
            end: minutes_to_time(end_minutes, end)?,
            total,
        },
    })
}

fn minutes_to_time(minutes: i64, raw: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
        .ok_or_else(|| ValidationError::InvalidTime(raw.to_string()))
}
