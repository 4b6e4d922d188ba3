use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::day_entry::DayEntry;

/// Calendar display flags for a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayMarker {
    pub has_entry: bool,
    pub selected: bool,
}

/// Derived view of one user's month, rebuilt wholesale on every month change
/// or entry mutation. Never persisted; the entry table is the source of truth.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub entries_by_date: BTreeMap<NaiveDate, DayEntry>,
    pub markers_by_date: BTreeMap<NaiveDate, DayMarker>,
}

impl MonthView {
    pub fn entry(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.entries_by_date.get(&date)
    }

    pub fn marker(&self, date: NaiveDate) -> DayMarker {
        self.markers_by_date.get(&date).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries_by_date.is_empty()
    }
}
