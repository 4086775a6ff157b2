//! Row types of the derived-series CSV tables.

use serde::{Deserialize, Serialize};

/// One day of the harmonic forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub day: f64,
    /// Normalized observation on this day, empty when none exists
    pub actual_norm: Option<f64>,
    pub composite: f64,
}

/// One sample of the resonance component table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub date: String,
    pub price: f64,
    pub detrended: f64,
    pub uri: f64,
    pub gann: f64,
    pub kozyrev: f64,
    pub dewey: f64,
    pub coherence: f64,
    pub band: String,
}
