//! Unified application error types.
//! All modules (store, core, export, config) return AppError to keep the
//! error handling consistent and easy to manage. Validation failures are a
//! separate enum so callers can recover locally without clearing user input.

use std::io;
use thiserror::Error;

/// Rejection reasons for a candidate day entry.
/// The validator stops at the first failing check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least one name is required")]
    NoNames,

    #[error("A location is required")]
    NoLocation,

    #[error("Both start and end times are required")]
    MissingTime,

    #[error("Invalid time format: {0} (expected HH:MM, e.g. 09:00)")]
    InvalidTime(String),

    #[error("End time must be after start time")]
    NonPositiveDuration,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("No entry found for key {0}")]
    NotFound(String),

    // ---------------------------
    // Validation / parsing
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("No authenticated user")]
    NotAuthenticated,

    // ---------------------------
    // External collaborators
    // ---------------------------
    #[error("Remote operation failed: {0}")]
    Remote(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("No entries for the selected month")]
    NoEntries,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
