//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The dataset is not a JSON array of movie records
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A record had an invalid value
    ///
    /// `index` is the zero-based position of the record in the dataset
    #[error("Invalid value for {field} in record {index}: {value}")]
    InvalidValue {
        index: usize,
        field: String,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
