//! Error types for the Vizora library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Vizora operations.
#[derive(Debug, Error)]
pub enum VizoraError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no data to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Input that violates the dataset contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A column name that is not part of the dataset.
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Vizora operations.
pub type Result<T> = std::result::Result<T, VizoraError>;
