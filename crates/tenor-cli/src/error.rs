//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use tenor_curves::CurveError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Malformed quotes file.
    #[error("Invalid quotes file {path}: {reason}")]
    InvalidQuotes {
        /// File that was read.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// Observation date not present in the quotes file.
    #[error("No quotes for {0}")]
    MissingDate(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Curve construction or bootstrap failure.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
