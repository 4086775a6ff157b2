//! Trait for rolling entropy estimation

use crate::error::Result;

/// Produces a per-sample entropy series aligned with its input.
pub trait EntropyEstimator: Send + Sync {
    /// Estimator name.
    fn name(&self) -> &str;

    /// Entropy series with the same length as `x`.
    fn entropy_series(&self, x: &[f64]) -> Result<Vec<f64>>;
}
