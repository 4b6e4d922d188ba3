use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Start/end of a working day plus the derived total in hours.
/// Invariant for persisted entries: `total > 0` (the validator enforces it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkHours {
    pub start: NaiveTime, // ⇔ entries.start_time (TEXT "HH:MM")
    pub end: NaiveTime,   // ⇔ entries.end_time (TEXT "HH:MM")
    pub total: f64,       // ⇔ entries.total_hours (REAL, 2 decimals)
}

impl WorkHours {
    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

/// One user's planner record for a single calendar date.
/// At most one entry exists per (user_id, date); the id is the composite key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub id: String,         // ⇔ entries.id (TEXT "{user_id}_{date}")
    pub date: NaiveDate,    // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub names: Vec<String>, // ⇔ entries.names (TEXT, JSON array)
    pub location: String,   // ⇔ entries.location (TEXT)
    pub work_hours: WorkHours,
    pub user_id: String,               // ⇔ entries.user_id (TEXT)
    pub created_at: DateTime<Local>,   // set once at first creation
    pub updated_at: DateTime<Local>,   // refreshed on every write
}

impl DayEntry {
    /// Composite key enforcing one entry per user per date.
    pub fn key(user_id: &str, date: NaiveDate) -> String {
        format!("{}_{}", user_id, date.format("%Y-%m-%d"))
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Names joined for display, e.g. "Alice, Bob".
    pub fn names_joined(&self) -> String {
        self.names.join(", ")
    }

    /// Hours summary for display, e.g. "09:00 - 17:30 (8.5h)".
    pub fn hours_summary(&self) -> String {
        format!(
            "{} - {} ({}h)",
            self.work_hours.start_str(),
            self.work_hours.end_str(),
            self.work_hours.total
        )
    }
}
