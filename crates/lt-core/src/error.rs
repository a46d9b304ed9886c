//! Error types for lt-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lt-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No line starts with the requested label
    #[error("no line starting with '{0}' was found")]
    LabelNotFound(String),

    /// A required line has no value field after the label
    #[error("required value is not found for '{label}'")]
    MissingValue { label: String },

    /// A required value is blank once joined
    #[error("required value is empty for '{label}'")]
    EmptyValue { label: String },

    /// A lookup label was blank
    #[error("lookup label must not be blank")]
    BlankLabel,

    /// Integer parse failure on a required field
    #[error("invalid integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Floating-point parse failure on a required field
    #[error("invalid number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// CSV output needs a delimiter that fits in a single byte
    #[error("delimiter '{0}' is not a single-byte character")]
    WideDelimiter(char),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
