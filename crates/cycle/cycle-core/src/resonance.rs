//! End-to-end resonance index computation over one series.

use crate::bands::DecisionBands;
use crate::entropy::RollingEntropy;
use crate::harmonic::HarmonicSynthesizer;
use cycle_spi::{CycleError, EntropyEstimator, ResonanceBand, ResonanceComponents, Result};

/// Start index of the trailing `horizon` samples of a series of length `len`.
pub fn trailing_start(len: usize, horizon: Option<usize>) -> usize {
    match horizon {
        Some(h) if len > h => len - h,
        _ => 0,
    }
}

/// Resonance fields and bands for the analysed tail of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct ResonanceReport {
    /// Index into the input series of the first analysed sample
    pub offset: usize,
    pub components: ResonanceComponents,
    pub bands: Vec<ResonanceBand>,
}

/// Entropy, field synthesis, compositing and banding in one pass.
#[derive(Debug, Clone)]
pub struct ResonanceEngine {
    synthesizer: HarmonicSynthesizer,
    entropy: RollingEntropy,
    bands: DecisionBands,
    horizon: Option<usize>,
}

impl ResonanceEngine {
    pub fn new(synthesizer: HarmonicSynthesizer, entropy: RollingEntropy, bands: DecisionBands) -> Self {
        Self {
            synthesizer,
            entropy,
            bands,
            horizon: None,
        }
    }

    /// Keep only the last `horizon` samples. Day offsets are not re-based.
    pub fn with_horizon(mut self, horizon: Option<usize>) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn run(&self, t: &[f64], y: &[f64]) -> Result<ResonanceReport> {
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

        let offset = trailing_start(t.len(), self.horizon);
        let (t, y) = (&t[offset..], &y[offset..]);

        let entropy = self.entropy.entropy_series(y)?;
        let components = self.synthesizer.synthesize(t, &entropy)?;
        let bands = self.bands.classify_series(&components.index);

        tracing::debug!(offset, samples = t.len(), "resonance index computed");

        Ok(ResonanceReport {
            offset,
            components,
            bands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonic::{GannParams, KozyrevParams};

    fn engine() -> ResonanceEngine {
        let synthesizer = HarmonicSynthesizer::new(
            GannParams {
                amplitudes: vec![1.0, 0.5],
                periods_days: vec![30.0, 90.0],
                phases_deg: vec![0.0, 45.0],
            },
            KozyrevParams { alpha: 0.0005, beta: 0.02 },
            vec![20.0, 60.0, 180.0],
            1.0,
        )
        .unwrap();
        ResonanceEngine::new(
            synthesizer,
            RollingEntropy::new(10, 8).unwrap(),
            DecisionBands::default(),
        )
    }

    #[test]
    fn test_trailing_start() {
        assert_eq!(trailing_start(100, Some(30)), 70);
        assert_eq!(trailing_start(20, Some(30)), 0);
        assert_eq!(trailing_start(20, None), 0);
    }

    #[test]
    fn test_run_full_series() {
        let t: Vec<f64> = (0..120).map(|i| i as f64).collect();
        let y: Vec<f64> = t.iter().map(|v| (v * 0.2).sin() + v * 0.01).collect();
        let report = engine().run(&t, &y).unwrap();
        assert_eq!(report.offset, 0);
        assert_eq!(report.components.len(), 120);
        assert_eq!(report.bands.len(), 120);
        assert!(report.components.index.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_run_with_horizon_keeps_day_offsets() {
        let t: Vec<f64> = (0..120).map(|i| i as f64).collect();
        let y: Vec<f64> = t.iter().map(|v| (v * 0.3).cos()).collect();
        let report = engine().with_horizon(Some(50)).run(&t, &y).unwrap();
        assert_eq!(report.offset, 70);
        assert_eq!(report.components.len(), 50);

        let full = crate::harmonic::dewey_field(&t[70..], &[20.0, 60.0, 180.0]).unwrap();
        assert_eq!(report.components.dewey, full);
    }

    #[test]
    fn test_run_rejects_mismatch() {
        assert!(engine().run(&[0.0, 1.0], &[1.0]).is_err());
        assert!(engine().run(&[], &[]).is_err());
    }
}
