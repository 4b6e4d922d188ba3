//! Time accounting: HH:MM parsing and elapsed-hour computation.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;

/// Accepts 0-23 hours (single or double digit) and 00-59 minutes.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid pattern"));

/// Parse an "HH:MM" string into minutes since midnight.
pub fn parse_time(s: &str) -> Result<i64, ValidationError> {
    let caps = TIME_RE
        .captures(s)
        .ok_or_else(|| ValidationError::InvalidTime(s.to_string()))?;

    let hours: i64 = caps[1]
        .parse()
        .map_err(|_| ValidationError::InvalidTime(s.to_string()))?;
    let minutes: i64 = caps[2]
        .parse()
        .map_err(|_| ValidationError::InvalidTime(s.to_string()))?;

    Ok(hours * 60 + minutes)
}

/// Elapsed hours between two same-day times, rounded to 2 decimals.
/// Zero or negative results are valid return values; callers enforce
/// positivity where the difference must be a real working duration.
pub fn compute_hours(start: &str, end: &str) -> Result<f64, ValidationError> {
    let start_minutes = parse_time(start)?;
    let end_minutes = parse_time(end)?;

    let diff = (end_minutes - start_minutes) as f64;
    Ok((diff / 60.0 * 100.0).round() / 100.0)
}
