//! Power spectrum and peak models

use crate::error::{CycleError, Result};
use crate::model::FrequencyGrid;
use serde::{Deserialize, Serialize};

/// How the scanner treats a vanishing sine or cosine basis norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegenerateBasisPolicy {
    /// Clamp the basis norm to a tiny positive floor and keep scanning
    #[default]
    Floor,
    /// Abort the scan with a degenerate computation error
    Reject,
}

/// Spectral power paired by index with the grid it was computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpectrum {
    grid: FrequencyGrid,
    power: Vec<f64>,
}

impl PowerSpectrum {
    /// Pair power values with their grid. Lengths must match.
    pub fn new(grid: FrequencyGrid, power: Vec<f64>) -> Result<Self> {
        if grid.len() != power.len() {
            return Err(CycleError::invalid_input(format!(
                "spectrum has {} values for a grid of {}",
                power.len(),
                grid.len()
            )));
        }
        Ok(Self { grid, power })
    }

    pub fn grid(&self) -> &FrequencyGrid {
        &self.grid
    }

    pub fn power(&self) -> &[f64] {
        &self.power
    }

    pub fn periods(&self) -> &[f64] {
        self.grid.periods()
    }

    pub fn len(&self) -> usize {
        self.power.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_empty()
    }
}

/// A spectral peak as reported in the dominant-cycle list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Index into the source spectrum
    #[serde(skip)]
    pub index: usize,
    /// Candidate period in days
    pub period_days: f64,
    /// Spectral power at that period
    pub power: f64,
}
