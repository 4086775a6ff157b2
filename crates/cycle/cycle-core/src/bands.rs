//! Decision bands over the resonance index.

use cycle_spi::{CycleError, ResonanceBand, Result};
use serde::{Deserialize, Serialize};

/// Upper and lower thresholds splitting the index into three bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionBands {
    pub threshold_pos: f64,
    pub threshold_neg: f64,
}

impl DecisionBands {
    pub fn new(threshold_pos: f64, threshold_neg: f64) -> Result<Self> {
        let bands = Self {
            threshold_pos,
            threshold_neg,
        };
        bands.validate()?;
        Ok(bands)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold_pos.is_finite() || !self.threshold_neg.is_finite() {
            return Err(CycleError::invalid_parameter("thresholds", "must be finite"));
        }
        if self.threshold_neg > self.threshold_pos {
            return Err(CycleError::invalid_parameter(
                "threshold_neg",
                format!(
                    "must not exceed threshold_pos ({} > {})",
                    self.threshold_neg, self.threshold_pos
                ),
            ));
        }
        Ok(())
    }

    /// Band of a single value. NaN is neutral.
    pub fn classify(&self, value: f64) -> ResonanceBand {
        if value >= self.threshold_pos {
            ResonanceBand::Above
        } else if value <= self.threshold_neg {
            ResonanceBand::Below
        } else {
            ResonanceBand::Neutral
        }
    }

    pub fn classify_series(&self, values: &[f64]) -> Vec<ResonanceBand> {
        values.iter().map(|&v| self.classify(v)).collect()
    }
}

impl Default for DecisionBands {
    fn default() -> Self {
        Self {
            threshold_pos: 1.0,
            threshold_neg: -1.0,
        }
    }
}
