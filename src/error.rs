//! Error types for the schema formats library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the schema formats library
///
/// Validation and date parsing never fail with an error; they answer with
/// `bool` or `Option`. This type covers the edges around them.
#[derive(Error, Debug)]
pub enum Error {
    /// Format name outside the supported set
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Date formatting options could not be decoded
    #[error("Invalid date format options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// No files matched pattern
    #[error("No files found matching pattern: {0}")]
    NoFilesMatched(String),

    /// Text contained no recognisable date
    #[error("No date found in: {0}")]
    UnparseableDate(String),
}
