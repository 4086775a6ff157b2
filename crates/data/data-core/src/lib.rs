//! Series Core
//!
//! Implementations for the data domain:
//!
//! - [`loader`]: CSV loading with date parsing, sorting and day offsets
//! - [`detrend`]: least-squares linear detrending
//! - [`writer`]: JSON and CSV artifact writers

pub mod detrend;
pub mod loader;
pub mod writer;

pub use data_spi::{ComponentRow, ForecastRow, LoadedSeries, Result, SeriesError, SeriesSource};

pub use detrend::{detrend, linear_fit};
pub use loader::{load_series, parse_date, CsvSeriesLoader};
pub use writer::{ensure_dir, write_csv, write_json};
