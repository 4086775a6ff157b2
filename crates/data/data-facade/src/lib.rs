//! Data Facade
//!
//! Unified re-exports for the data domain:
//! - `data_spi` - Traits, models and errors for series sources
//! - `data_api` - Input configuration and builder
//! - `data_core` - CSV loader, detrending and artifact writers
//!
//! # Example
//!
//! ```rust,ignore
//! use data_facade::{load_series, SeriesConfig};
//!
//! let series = load_series(&SeriesConfig::new("data/spx.csv"))?;
//! println!("{} samples over {} days", series.len(), series.last_day().unwrap_or(0.0));
//! ```

// Re-export everything from API (which includes SPI)
pub use data_api::*;

// Explicit re-exports for documentation
pub use data_api::prelude;

// Re-export core implementations
pub use data_core::{
    detrend, ensure_dir, linear_fit, load_series, parse_date, write_csv, write_json,
    CsvSeriesLoader,
};
