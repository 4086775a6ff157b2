//! Series source trait definition.

use crate::error::Result;
use crate::model::LoadedSeries;

/// Anything that can produce one dated, detrended price series.
pub trait SeriesSource: Send + Sync {
    /// Source name, used in logs.
    fn name(&self) -> &str;

    /// Load, sort and detrend the series.
    fn load(&self) -> Result<LoadedSeries>;
}
