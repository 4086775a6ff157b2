//! Harmonic composite forecast with Kozyrev phase drift.

use crate::harmonic::{ensure_finite, ensure_positive_periods};
use crate::normalize::normalize;
use cycle_spi::{CycleError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

fn default_phase_rate() -> f64 {
    0.002
}

fn default_horizon_days() -> usize {
    300
}

/// Parameters of the composite forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastParams {
    /// Cycle lengths in days; the i-th (1-based) cycle is weighted 1/i
    pub cycles_days: Vec<f64>,
    /// Phase drift in cycles per day
    #[serde(default = "default_phase_rate")]
    pub kozyrev_phase_rate: f64,
    /// Days projected past the last observation
    #[serde(default = "default_horizon_days")]
    pub horizon_days: usize,
}

impl ForecastParams {
    pub fn new(cycles_days: Vec<f64>) -> Self {
        Self {
            cycles_days,
            kozyrev_phase_rate: default_phase_rate(),
            horizon_days: default_horizon_days(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cycles_days.is_empty() {
            return Err(CycleError::invalid_parameter(
                "forecast.cycles_days",
                "needs at least one cycle",
            ));
        }
        ensure_positive_periods("forecast.cycles_days", &self.cycles_days)?;
        if !self.kozyrev_phase_rate.is_finite() {
            return Err(CycleError::invalid_parameter(
                "forecast.kozyrev_phase_rate",
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Phase drift `2π·rate·(t − min t)`.
pub fn kozyrev_bias(t: &[f64], rate: f64) -> Vec<f64> {
    let start = t.iter().copied().fold(f64::INFINITY, f64::min);
    t.iter().map(|&ti| 2.0 * PI * rate * (ti - start)).collect()
}

/// `Σᵢ (1/i)·sin(2π/Pᵢ·t + bias(t))` with 1-based cycle weights.
pub fn harmonic_composite(t: &[f64], cycles: &[f64], rate: f64) -> Result<Vec<f64>> {
    ensure_positive_periods("cycles", cycles)?;
    ensure_finite("t", t)?;

    let bias = kozyrev_bias(t, rate);
    Ok(t.iter()
        .zip(&bias)
        .map(|(&ti, &b)| {
            cycles
                .iter()
                .enumerate()
                .map(|(i, &p)| (1.0 / (i + 1) as f64) * (2.0 * PI / p * ti + b).sin())
                .sum::<f64>()
        })
        .collect())
}

/// Composite projected over the observed span and the forecast horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicForecast {
    /// Whole-day axis `0..=t_last + horizon`
    pub days: Vec<f64>,
    /// Normalized composite over `days`
    pub composite: Vec<f64>,
    /// Day offsets of the observations
    pub observed_days: Vec<f64>,
    /// Normalized observations
    pub observed: Vec<f64>,
    /// First index of `days` past the last observation
    pub forecast_start: usize,
}

impl HarmonicForecast {
    /// Observations placed on the whole-day axis; days without one are `None`.
    pub fn observed_on_axis(&self) -> Vec<Option<f64>> {
        let mut aligned = vec![None; self.days.len()];
        for (&day, &value) in self.observed_days.iter().zip(&self.observed) {
            if day >= 0.0 {
                if let Some(slot) = aligned.get_mut(day.floor() as usize) {
                    *slot = Some(value);
                }
            }
        }
        aligned
    }
}

/// Project the composite over the observed series and `horizon_days` beyond it.
pub fn harmonic_forecast(t: &[f64], y: &[f64], params: &ForecastParams) -> Result<HarmonicForecast> {
    params.validate()?;
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
    ensure_finite("t", t)?;

    let last = t.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let stop = last + params.horizon_days as f64 + 1.0;
    let count = stop.ceil().max(0.0) as usize;
    let days: Vec<f64> = (0..count).map(|d| d as f64).collect();

    let composite = normalize(&harmonic_composite(
        &days,
        &params.cycles_days,
        params.kozyrev_phase_rate,
    )?);
    let forecast_start = ((last.floor() + 1.0).max(0.0) as usize).min(days.len());

    tracing::debug!(
        observed = t.len(),
        projected = days.len(),
        forecast_start,
        "harmonic forecast built"
    );

    Ok(HarmonicForecast {
        days,
        composite,
        observed_days: t.to_vec(),
        observed: normalize(y),
        forecast_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_starts_at_zero() {
        let bias = kozyrev_bias(&[10.0, 11.0, 20.0], 0.5);
        assert_eq!(bias[0], 0.0);
        assert!((bias[1] - PI).abs() < 1e-12);
        assert!((bias[2] - 10.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_composite_weights() {
        // Zero drift reduces to a weighted sine sum
        let t = [7.0];
        let cycles = [20.0, 50.0];
        let value = harmonic_composite(&t, &cycles, 0.0).unwrap()[0];
        let expected = (2.0 * PI / 20.0 * 7.0).sin() + 0.5 * (2.0 * PI / 50.0 * 7.0).sin();
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_forecast_axis_extends_past_last_day() {
        let t = [0.0, 1.0, 2.0, 4.0];
        let y = [1.0, 2.0, 1.5, 3.0];
        let mut params = ForecastParams::new(vec![10.0, 30.0]);
        params.horizon_days = 5;
        let forecast = harmonic_forecast(&t, &y, &params).unwrap();
        assert_eq!(forecast.days.len(), 10);
        assert_eq!(*forecast.days.last().unwrap(), 9.0);
        assert_eq!(forecast.forecast_start, 5);
        assert_eq!(forecast.composite.len(), 10);

        let aligned = forecast.observed_on_axis();
        assert!(aligned[3].is_none());
        assert!(aligned[4].is_some());
        assert!(aligned[5..].iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_forecast_validates() {
        let params = ForecastParams::new(vec![]);
        assert!(harmonic_forecast(&[0.0], &[1.0], &params).is_err());

        let params = ForecastParams::new(vec![10.0]);
        assert!(harmonic_forecast(&[], &[], &params).is_err());
        assert!(harmonic_forecast(&[0.0, 1.0], &[1.0], &params).is_err());
    }
}
