//! Contracts for series providers.

mod series_source;

pub use series_source::SeriesSource;
