//! Rolling-window Shannon entropy used as a coherence proxy.

use crate::normalize::normalize;
use cycle_spi::{CycleError, EntropyEstimator, Result};

/// Shannon entropy in bits of an equal-width histogram over `window`.
///
/// The bins span the window's own value range; a constant window is widened
/// by half a unit on each side so its values land in a single interior bin.
/// Windows holding non-finite values yield NaN.
pub fn window_entropy(window: &[f64], bins: usize) -> f64 {
    if window.is_empty() || bins == 0 {
        return 0.0;
    }
    if window.iter().any(|v| !v.is_finite()) {
        return f64::NAN;
    }

    let (mut lo, mut hi) = window
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let scale = bins as f64 / (hi - lo);
    let mut counts = vec![0usize; bins];
    for &v in window {
        let idx = ((v - lo) * scale).floor() as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    // Density height times bin width reduces to count / n for equal-width bins
    let total = window.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

fn validate(window: usize, bins: usize) -> Result<()> {
    if window == 0 {
        return Err(CycleError::DegenerateComputation(
            "rolling window has zero length".to_string(),
        ));
    }
    if bins == 0 {
        return Err(CycleError::invalid_parameter("bins", "must be at least 1"));
    }
    Ok(())
}

/// Unnormalized entropies of the trailing windows `x[i-window..i]`.
///
/// Indices below `window` are NaN.
pub fn raw_rolling_entropy(x: &[f64], window: usize, bins: usize) -> Result<Vec<f64>> {
    validate(window, bins)?;

    let mut entropy = vec![f64::NAN; x.len()];
    for i in window..x.len() {
        entropy[i] = window_entropy(&x[i - window..i], bins);
    }
    Ok(entropy)
}

/// Rolling entropy aligned with `x`, globally z-scored.
///
/// The first `window` entries take the minimum finite entropy seen anywhere
/// in the series (0.0 when none exists) before normalization. Any NaN left
/// after normalization becomes 0.0.
pub fn rolling_entropy(x: &[f64], window: usize, bins: usize) -> Result<Vec<f64>> {
    let mut entropy = raw_rolling_entropy(x, window, bins)?;

    let fill = entropy
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::min)
        .unwrap_or(0.0);
    let boundary = window.min(entropy.len());
    entropy[..boundary].iter_mut().for_each(|v| *v = fill);

    tracing::debug!(len = x.len(), window, bins, fill, "rolling entropy computed");

    Ok(normalize(&entropy)
        .into_iter()
        .map(|v| if v.is_nan() { 0.0 } else { v })
        .collect())
}

/// Rolling entropy estimator with fixed window and bin count.
#[derive(Debug, Clone)]
pub struct RollingEntropy {
    window: usize,
    bins: usize,
}

impl RollingEntropy {
    pub fn new(window: usize, bins: usize) -> Result<Self> {
        validate(window, bins)?;
        Ok(Self { window, bins })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn bins(&self) -> usize {
        self.bins
    }
}

impl Default for RollingEntropy {
    fn default() -> Self {
        Self { window: 30, bins: 20 }
    }
}

impl EntropyEstimator for RollingEntropy {
    fn name(&self) -> &str {
        "RollingEntropy"
    }

    fn entropy_series(&self, x: &[f64]) -> Result<Vec<f64>> {
        rolling_entropy(x, self.window, self.bins)
    }
}
