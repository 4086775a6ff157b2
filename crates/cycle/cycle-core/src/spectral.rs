//! Lomb-Scargle spectral scan for irregularly sampled series.
//!
//! Each candidate angular frequency is evaluated independently, so the grid
//! is scanned in parallel. Per-frequency sums stay sequential, which keeps the
//! result identical to a serial scan.

use cycle_spi::{
    CycleError, DegenerateBasisPolicy, FrequencyGrid, Peak, PowerSpectrum, Result,
    SpectralEstimator,
};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Smallest basis norm accepted under [`DegenerateBasisPolicy::Floor`].
pub const BASIS_FLOOR: f64 = 1e-15;

/// Lomb-Scargle power over `frequencies` (angular, radians per day).
///
/// Uses the default [`DegenerateBasisPolicy::Floor`].
pub fn scan(t: &[f64], y: &[f64], frequencies: &[f64]) -> Result<Vec<f64>> {
    scan_with_policy(t, y, frequencies, DegenerateBasisPolicy::Floor)
}

/// Lomb-Scargle power with an explicit policy for vanishing basis norms.
pub fn scan_with_policy(
    t: &[f64],
    y: &[f64],
    frequencies: &[f64],
    policy: DegenerateBasisPolicy,
) -> Result<Vec<f64>> {
    validate_series(t, y)?;
    if let Some(bad) = frequencies.iter().find(|w| !w.is_finite() || **w <= 0.0) {
        return Err(CycleError::invalid_input(format!(
            "angular frequencies must be finite and positive, got {}",
            bad
        )));
    }

    let mean = y.iter().sum::<f64>() / y.len() as f64;
    let centered: Vec<f64> = y.iter().map(|v| v - mean).collect();

    let evaluated = frequencies
        .par_iter()
        .map(|&omega| power_at(t, &centered, omega, policy))
        .collect::<Result<Vec<(f64, bool)>>>()?;

    let floored = evaluated.iter().filter(|(_, f)| *f).count();
    if floored > 0 {
        tracing::warn!(
            floored,
            total = frequencies.len(),
            "spectral basis norm floored at {:e}",
            BASIS_FLOOR
        );
    }
    tracing::debug!(samples = t.len(), frequencies = frequencies.len(), "spectral scan complete");

    Ok(evaluated.into_iter().map(|(p, _)| p).collect())
}

/// Power at a single angular frequency; the flag reports a floored basis.
fn power_at(
    t: &[f64],
    centered: &[f64],
    omega: f64,
    policy: DegenerateBasisPolicy,
) -> Result<(f64, bool)> {
    let two_omega = 2.0 * omega;
    let (mut sum_sin2, mut sum_cos2) = (0.0, 0.0);
    for &ti in t {
        let arg = two_omega * ti;
        sum_sin2 += arg.sin();
        sum_cos2 += arg.cos();
    }
    // Phase offset that makes the sine and cosine bases orthogonal
    let tau = sum_sin2.atan2(sum_cos2) / two_omega;

    let (mut cc, mut ss, mut yc, mut ys) = (0.0, 0.0, 0.0, 0.0);
    for (&ti, &yi) in t.iter().zip(centered) {
        let arg = omega * (ti - tau);
        let (s, c) = arg.sin_cos();
        cc += c * c;
        ss += s * s;
        yc += yi * c;
        ys += yi * s;
    }

    let degenerate = cc < BASIS_FLOOR || ss < BASIS_FLOOR;
    if degenerate && policy == DegenerateBasisPolicy::Reject {
        return Err(CycleError::DegenerateComputation(format!(
            "{} basis vanishes at period {:.4} days",
            if cc < BASIS_FLOOR { "cosine" } else { "sine" },
            2.0 * std::f64::consts::PI / omega
        )));
    }

    let cc = cc.max(BASIS_FLOOR);
    let ss = ss.max(BASIS_FLOOR);
    Ok((0.5 * (yc * yc / cc + ys * ys / ss), degenerate))
}

fn validate_series(t: &[f64], y: &[f64]) -> Result<()> {
    if t.is_empty() {
        return Err(CycleError::invalid_input("time axis is empty"));
    }
    if t.len() != y.len() {
        return Err(CycleError::invalid_input(format!(
            "time axis has {} samples but values have {}",
            t.len(),
            y.len()
        )));
    }
    if t.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(CycleError::invalid_input("series contains non-finite values"));
    }
    Ok(())
}

/// Indices of the `k` largest powers, descending; ties keep the lower index.
///
/// Adjacent grid points of one physical peak may both be returned.
pub fn top_k_indices(power: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..power.len()).collect();
    order.sort_by(|&a, &b| match power[b].total_cmp(&power[a]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });
    order.truncate(k.min(power.len()));
    order
}

/// The `k` strongest entries of `spectrum` as peaks, strongest first.
pub fn top_k(spectrum: &PowerSpectrum, k: usize) -> Vec<Peak> {
    top_k_indices(spectrum.power(), k)
        .into_iter()
        .map(|index| Peak {
            index,
            period_days: spectrum.periods()[index],
            power: spectrum.power()[index],
        })
        .collect()
}

/// Lomb-Scargle estimator bound to a degenerate-basis policy.
#[derive(Debug, Clone, Default)]
pub struct LombScargle {
    policy: DegenerateBasisPolicy,
}

impl LombScargle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DegenerateBasisPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DegenerateBasisPolicy {
        self.policy
    }
}

impl SpectralEstimator for LombScargle {
    fn name(&self) -> &str {
        "LombScargle"
    }

    fn power_spectrum(&self, t: &[f64], y: &[f64], grid: &FrequencyGrid) -> Result<PowerSpectrum> {
        let power = scan_with_policy(t, y, grid.angular_frequencies(), self.policy)?;
        PowerSpectrum::new(grid.clone(), power)
    }
}
