use serde::Serialize;

use crate::models::day_entry::DayEntry;
use crate::utils::date::format_display_date;

/// Flat row shape shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct EntryRow {
    pub date: String,
    pub names: String,
    pub location: String,
    pub work_hours: String,
}

/// Header for CSV / HTML tables.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Date", "Names", "Location", "Work Hours"]
}

pub(crate) fn entry_to_row(entry: &DayEntry, show_weekday: &str) -> EntryRow {
    EntryRow {
        date: format_display_date(entry.date, show_weekday),
        names: entry.names_joined(),
        location: entry.location.clone(),
        work_hours: entry.hours_summary(),
    }
}
