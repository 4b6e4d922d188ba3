pub mod date;

pub use date::{format_display_date, month_bounds, month_name, parse_date};
