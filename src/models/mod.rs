pub mod day_entry;
pub mod month;

pub use day_entry::{DayEntry, WorkHours};
pub use month::{DayMarker, MonthView};
