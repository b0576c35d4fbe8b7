//! Unified application error types.
//!
//! The core (state machine and attendance read path) returns its own closed
//! enums so every call site has to handle each rejection kind. The CLI layer
//! folds everything into `AppError`.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

use crate::models::stamp::StampId;

/// Failure raised by a `StampStore` implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A guarded write matched no row: someone else changed the stamp first.
    #[error("concurrent update rejected for {date}")]
    Conflict { date: NaiveDate },

    #[error("stamp {id} does not exist")]
    Missing { id: StampId },

    #[error("corrupt stored value: {0}")]
    Corrupt(String),
}

/// Rejections produced by the stamp state machine.
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Already clocked in for {date}")]
    AlreadyClockedIn { date: NaiveDate },

    #[error("Already clocked out for {date}")]
    AlreadyClockedOut { date: NaiveDate },

    #[error("Already on break for {date}")]
    AlreadyOnBreak { date: NaiveDate },

    #[error("Not clocked in for {date}")]
    NotClockedIn { date: NaiveDate },

    #[error("Not on break for {date}")]
    NotOnBreak { date: NaiveDate },

    #[error("Still on break for {date}. End break first.")]
    StillOnBreak { date: NaiveDate },

    #[error("No stamp record for {date}")]
    StampNotFound { date: NaiveDate },

    #[error("{0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Rejections produced by the attendance read path.
#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("No attendance record for {date}")]
    NotFound { date: NaiveDate },

    #[error("From date ({from}) must be before or equal to to date ({to})")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("{0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    // ---------------------------
    // Domain
    // ---------------------------
    #[error(transparent)]
    Stamp(#[from] StampError),

    #[error(transparent)]
    Attendance(#[from] AttendanceError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
