//! Trait for spectral power estimation

use crate::error::Result;
use crate::model::{FrequencyGrid, PowerSpectrum};

/// Estimates spectral power of a possibly irregularly sampled series.
pub trait SpectralEstimator: Send + Sync {
    /// Estimator name.
    fn name(&self) -> &str;

    /// Power at every grid entry, paired with the grid by index.
    fn power_spectrum(&self, t: &[f64], y: &[f64], grid: &FrequencyGrid) -> Result<PowerSpectrum>;
}
