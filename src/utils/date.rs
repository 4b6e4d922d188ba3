//! Calendar date helpers: ISO parsing, month bounds, display formatting.

use chrono::NaiveDate;

use crate::errors::{AppError, AppResult};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Today's calendar date, the default target for a quick-add entry.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First and last day of a calendar month, inclusive.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let last_day = month_last_day(year, month)
        .ok_or_else(|| AppError::InvalidDate(format!("{:04}-{:02}", year, month)))?;

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{:04}-{:02}-01", year, month)))?;
    let last = NaiveDate::from_ymd_opt(year, month, last_day)
        .ok_or_else(|| AppError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, last_day)))?;

    Ok((first, last))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

pub fn month_name(m: u32) -> &'static str {
    match m {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Render a date for human-readable output.
/// `show_weekday` follows the config values: "None", "Short" or "Full".
pub fn format_display_date(date: NaiveDate, show_weekday: &str) -> String {
    let iso = date.format("%Y-%m-%d");
    match show_weekday {
        "Short" => format!("{} {}", date.format("%a"), iso),
        "Full" => format!("{} {}", date.format("%A"), iso),
        _ => iso.to_string(),
    }
}
