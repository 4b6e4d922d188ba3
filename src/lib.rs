//! rPlanner library root.
//! Core of a personal work planner: per-day crew entries, monthly calendar
//! aggregation, and document export. Identity, document storage and document
//! rendering are collaborator traits implemented by the host application.

pub mod auth;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod utils;

pub use auth::{Identity, Session};
pub use config::Config;
pub use errors::{AppError, AppResult, ValidationError};
pub use models::day_entry::{DayEntry, WorkHours};
pub use models::month::{DayMarker, MonthView};
pub use store::EntryStore;
pub use store::repository::EntryRepository;
pub use store::sqlite::SqliteStore;
