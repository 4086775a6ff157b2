//! Data models for loaded series and derived tables.

mod loaded_series;
mod rows;

pub use loaded_series::LoadedSeries;
pub use rows::{ComponentRow, ForecastRow};
