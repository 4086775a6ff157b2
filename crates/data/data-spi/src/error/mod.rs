//! Error types for series loading and artifact writing.

mod series_error;

pub use series_error::SeriesError;

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
