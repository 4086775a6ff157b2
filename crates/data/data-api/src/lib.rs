//! Series Consumer API
//!
//! Configuration types for loading a dated price series.

mod config;

pub use config::{SeriesConfig, SeriesConfigBuilder};

// Re-export from SPI
pub use data_spi::{ComponentRow, ForecastRow, LoadedSeries, Result, SeriesError, SeriesSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{SeriesConfig, SeriesConfigBuilder};
    pub use data_spi::{LoadedSeries, Result, SeriesError, SeriesSource};
}
