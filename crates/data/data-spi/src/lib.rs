//! Series Source Service Provider Interface
//!
//! Defines traits and types for loading dated price series and for the
//! tabular artifacts derived from them.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesSource;
pub use error::{Result, SeriesError};
pub use model::{ComponentRow, ForecastRow, LoadedSeries};
