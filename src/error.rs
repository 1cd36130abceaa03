//! Custom error types for saldo-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for saldo-cli operations
#[derive(Error, Debug)]
pub enum SaldoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A row whose amount could not be parsed as a number
    #[error("Malformed row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    /// Start date after end date
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SaldoError {
    /// Check if this is a range validation error
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }

    /// Check if this is a malformed-row error
    pub fn is_malformed_row(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SaldoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaldoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SaldoError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for saldo-cli operations
pub type SaldoResult<T> = Result<T, SaldoError>;
