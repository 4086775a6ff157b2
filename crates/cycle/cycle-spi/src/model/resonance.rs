//! Resonance index models

use serde::{Deserialize, Serialize};

/// Decision band of a resonance index value relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResonanceBand {
    Above,
    Neutral,
    Below,
}

impl ResonanceBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResonanceBand::Above => "above",
            ResonanceBand::Neutral => "neutral",
            ResonanceBand::Below => "below",
        }
    }

    /// Numeric form: Above = 1, Below = -1, Neutral = 0.
    pub fn to_numeric(&self) -> f64 {
        match self {
            ResonanceBand::Above => 1.0,
            ResonanceBand::Neutral => 0.0,
            ResonanceBand::Below => -1.0,
        }
    }
}

impl std::fmt::Display for ResonanceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The composite resonance index together with the fields it was built from.
///
/// All vectors share the length and index alignment of the driving day axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ResonanceComponents {
    /// Gann sinusoid sum
    pub gann: Vec<f64>,
    /// Kozyrev decaying oscillation
    pub kozyrev: Vec<f64>,
    /// Dewey multi-cycle sum
    pub dewey: Vec<f64>,
    /// Entropy-derived coherence weight
    pub coherence: Vec<f64>,
    /// Normalized product of the four fields
    pub index: Vec<f64>,
}

impl ResonanceComponents {
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
