//! Series error types.

use thiserror::Error;

/// Series loading and writing errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// File could not be opened, created or written
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed CSV document
    #[error("CSV error: {0}")]
    Csv(String),

    /// Header lacks a configured column
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// A field failed to parse; `row` is the line number in the file
    #[error("Parse error at row {row}: {reason}")]
    Parse { row: u64, reason: String },

    /// No data rows
    #[error("Series is empty")]
    Empty,

    /// Artifact serialization failed
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl SeriesError {
    pub fn parse(row: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            row,
            reason: reason.into(),
        }
    }
}
