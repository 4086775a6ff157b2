//! Candidate frequency grid for spectral scans

use crate::error::{CycleError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Ordered candidate periods and their angular frequencies (`ω = 2π/period`).
///
/// Entry `i` of [`periods`](Self::periods) and
/// [`angular_frequencies`](Self::angular_frequencies) describe the same
/// candidate. Periods are strictly positive and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord")]
pub struct FrequencyGrid {
    periods: Vec<f64>,
    omegas: Vec<f64>,
}

/// Serialized form; angular frequencies are always re-derived from periods.
#[derive(Deserialize)]
struct GridRecord {
    periods: Vec<f64>,
}

impl TryFrom<GridRecord> for FrequencyGrid {
    type Error = CycleError;

    fn try_from(record: GridRecord) -> Result<Self> {
        Self::from_periods(record.periods)
    }
}

impl FrequencyGrid {
    /// `size` periods linearly spaced over `[min_period, max_period]`.
    ///
    /// The endpoints are included; a single-point grid holds `min_period`.
    pub fn from_period_range(min_period: f64, max_period: f64, size: usize) -> Result<Self> {
        if !min_period.is_finite() || min_period <= 0.0 {
            return Err(CycleError::invalid_parameter(
                "min_period",
                format!("must be finite and positive, got {}", min_period),
            ));
        }
        if !max_period.is_finite() || max_period < min_period {
            return Err(CycleError::invalid_parameter(
                "max_period",
                format!("must be finite and >= min_period ({}), got {}", min_period, max_period),
            ));
        }
        if size == 0 {
            return Err(CycleError::invalid_parameter("size", "grid needs at least one point"));
        }

        let periods = if size == 1 {
            vec![min_period]
        } else {
            let step = (max_period - min_period) / (size - 1) as f64;
            let mut periods: Vec<f64> = (0..size)
                .map(|i| min_period + i as f64 * step)
                .collect();
            periods[size - 1] = max_period;
            periods
        };

        Self::from_periods(periods)
    }

    /// Grid from an explicit list of periods.
    pub fn from_periods(periods: Vec<f64>) -> Result<Self> {
        if periods.is_empty() {
            return Err(CycleError::invalid_input("frequency grid is empty"));
        }
        if let Some(bad) = periods.iter().find(|p| !p.is_finite() || **p <= 0.0) {
            return Err(CycleError::invalid_input(format!(
                "grid periods must be finite and positive, got {}",
                bad
            )));
        }
        let omegas = periods.iter().map(|p| 2.0 * PI / p).collect();
        Ok(Self { periods, omegas })
    }

    /// Grid from an explicit list of angular frequencies.
    pub fn from_angular_frequencies(omegas: Vec<f64>) -> Result<Self> {
        if omegas.is_empty() {
            return Err(CycleError::invalid_input("frequency grid is empty"));
        }
        if let Some(bad) = omegas.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(CycleError::invalid_input(format!(
                "angular frequencies must be finite and positive, got {}",
                bad
            )));
        }
        let periods = omegas.iter().map(|w| 2.0 * PI / w).collect();
        Ok(Self { periods, omegas })
    }

    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    pub fn angular_frequencies(&self) -> &[f64] {
        &self.omegas
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_range_endpoints() {
        let grid = FrequencyGrid::from_period_range(5.0, 720.0, 3000).unwrap();
        assert_eq!(grid.len(), 3000);
        assert_eq!(grid.periods()[0], 5.0);
        assert_eq!(grid.periods()[2999], 720.0);
        assert!((grid.angular_frequencies()[0] - 2.0 * PI / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_periods_ascend_frequencies_descend() {
        let grid = FrequencyGrid::from_period_range(5.0, 50.0, 10).unwrap();
        for w in grid.periods().windows(2) {
            assert!(w[1] > w[0]);
        }
        for w in grid.angular_frequencies().windows(2) {
            assert!(w[1] < w[0]);
        }
    }

    #[test]
    fn test_single_point_grid() {
        let grid = FrequencyGrid::from_period_range(30.0, 90.0, 1).unwrap();
        assert_eq!(grid.periods(), &[30.0]);
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(FrequencyGrid::from_period_range(0.0, 10.0, 5).is_err());
        assert!(FrequencyGrid::from_period_range(-1.0, 10.0, 5).is_err());
        assert!(FrequencyGrid::from_period_range(10.0, 5.0, 5).is_err());
        assert!(FrequencyGrid::from_period_range(5.0, f64::INFINITY, 5).is_err());
        assert!(FrequencyGrid::from_period_range(5.0, 10.0, 0).is_err());
    }

    #[test]
    fn test_from_angular_frequencies() {
        let grid = FrequencyGrid::from_angular_frequencies(vec![2.0 * PI / 10.0]).unwrap();
        assert!((grid.periods()[0] - 10.0).abs() < 1e-12);
        assert!(FrequencyGrid::from_angular_frequencies(vec![1.0, 0.0]).is_err());
        assert!(FrequencyGrid::from_angular_frequencies(vec![]).is_err());
    }

    #[test]
    fn test_deserialize_validates_periods() {
        let grid = FrequencyGrid::from_period_range(5.0, 50.0, 4).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: FrequencyGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, grid);

        let bad = r#"{"periods":[10.0,-3.0],"omegas":[0.6,-2.0]}"#;
        assert!(serde_json::from_str::<FrequencyGrid>(bad).is_err());

        // Inconsistent omegas are replaced by ones derived from the periods
        let mismatched = r#"{"periods":[10.0],"omegas":[99.0]}"#;
        let grid: FrequencyGrid = serde_json::from_str(mismatched).unwrap();
        assert!((grid.angular_frequencies()[0] - 2.0 * PI / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_periods_rejects_non_positive() {
        assert!(FrequencyGrid::from_periods(vec![10.0, -3.0]).is_err());
        assert!(FrequencyGrid::from_periods(vec![f64::NAN]).is_err());
    }
}
