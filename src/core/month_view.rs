//! Month aggregation for the calendar: entry and marker indexes by date.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::day_entry::DayEntry;
use crate::models::month::{DayMarker, MonthView};

/// Build the derived month view from a queried entry set.
///
/// Every entry date is marked `has_entry`; the selected date (if any) is
/// marked `selected` whether or not it carries an entry. Duplicate dates
/// cannot occur under the composite-key invariant, but if one slips in the
/// last entry wins. The whole view is recomputed on every call.
pub fn build_month_view(
    year: i32,
    month: u32,
    entries: Vec<DayEntry>,
    selected: Option<NaiveDate>,
) -> MonthView {
    let mut entries_by_date: BTreeMap<NaiveDate, DayEntry> = BTreeMap::new();
    let mut markers_by_date: BTreeMap<NaiveDate, DayMarker> = BTreeMap::new();

    for entry in entries {
        markers_by_date.insert(
            entry.date,
            DayMarker {
                has_entry: true,
                selected: selected == Some(entry.date),
            },
        );
        entries_by_date.insert(entry.date, entry);
    }

    if let Some(sel) = selected {
        markers_by_date
            .entry(sel)
            .and_modify(|m| m.selected = true)
            .or_insert(DayMarker {
                has_entry: false,
                selected: true,
            });
    }

    MonthView {
        year,
        month,
        entries_by_date,
        markers_by_date,
    }
}
