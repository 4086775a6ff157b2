//! Error module containing error types and result aliases

mod cycle_error;

pub use cycle_error::{CycleError, ErrorKind};

/// Result type for cycle analysis operations
pub type Result<T> = std::result::Result<T, CycleError>;
