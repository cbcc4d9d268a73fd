//! Error types for dataset loading and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

/// Errors raised while loading and normalizing the visit dataset.
///
/// Any of these aborts the whole load; there is no partial dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file could not be opened
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, wrong field count, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// `Check-In Time` does not match `%Y-%m-%d %I:%M:%S %p`
    #[error("Invalid check-in time at row {row}: '{value}' ({source})")]
    InvalidTimestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A numeric column holds something other than a usable number
    #[error("Invalid {column} at row {row}: '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl DatasetError {
    /// 1-based data row the error refers to, when known.
    pub fn row(&self) -> Option<usize> {
        match self {
            DatasetError::InvalidTimestamp { row, .. } | DatasetError::InvalidNumber { row, .. } => {
                Some(*row)
            }
            DatasetError::Csv(e) => e.position().map(|p| p.record() as usize),
            _ => None,
        }
    }
}

/// Errors raised while reading `dashboard.toml` or applying env overrides.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidOverride { key: &'static str, value: String },

    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),
}
