//! Cycle analysis error types

use thiserror::Error;

/// Errors raised by the cycle analysis core.
///
/// Every core function is pure and fails fast on a violated precondition
/// instead of producing NaN-filled output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Malformed input sequences (empty, mismatched lengths, non-finite values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A scalar or list parameter is out of its valid domain
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The computation reached a numerically undefined state
    #[error("Degenerate computation: {0}")]
    DegenerateComputation(String),
}

/// Coarse classification of a [`CycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    DegenerateComputation,
}

impl CycleError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CycleError::InvalidInput(message.into())
    }

    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CycleError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Classify the error. Parameter errors count as invalid input.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CycleError::InvalidInput(_) | CycleError::InvalidParameter { .. } => {
                ErrorKind::InvalidInput
            }
            CycleError::DegenerateComputation(_) => ErrorKind::DegenerateComputation,
        }
    }
}
