//! Polar geometry of the harmonic wheel.
//!
//! Angles are measured clockwise from north, in radians. Radii live in
//! `[INNER_RADIUS, OUTER_RADIUS]`.

use crate::harmonic::ensure_positive_periods;
use cycle_spi::{CycleError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const INNER_RADIUS: f64 = 0.15;
pub const OUTER_RADIUS: f64 = 0.95;
pub const SPIRAL_SAMPLES: usize = 600;

/// Inputs of the wheel layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelParams {
    pub cycles_days: Vec<f64>,
    pub gann_angles_deg: Vec<f64>,
    /// Extra turns of the Kozyrev spiral per unit radius
    pub spiral_rate: f64,
}

/// One ring per cycle length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub period_days: f64,
    pub radius: f64,
}

/// A radial spoke at a Gann angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub angle_deg: f64,
    pub theta: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    pub rings: Vec<Ring>,
    pub spokes: Vec<Spoke>,
    /// `(theta, radius)` samples of the spiral, centre outwards
    pub spiral: Vec<(f64, f64)>,
}

/// Clockwise-from-north polar point to Cartesian `(x, y)`.
pub fn polar_to_cartesian(theta: f64, radius: f64) -> (f64, f64) {
    (radius * theta.sin(), radius * theta.cos())
}

/// Lay out rings, spokes and spiral.
///
/// Ring radius falls with log period, so the longest cycle sits innermost.
pub fn build_wheel(params: &WheelParams) -> Result<WheelGeometry> {
    if params.cycles_days.is_empty() {
        return Err(CycleError::invalid_parameter(
            "wheel.cycles_days",
            "needs at least one cycle",
        ));
    }
    ensure_positive_periods("wheel.cycles_days", &params.cycles_days)?;
    if params.gann_angles_deg.iter().any(|a| !a.is_finite()) || !params.spiral_rate.is_finite() {
        return Err(CycleError::invalid_parameter(
            "wheel",
            "angles and spiral rate must be finite",
        ));
    }

    let logs: Vec<f64> = params.cycles_days.iter().map(|p| p.ln()).collect();
    let lo = logs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;

    let rings = params
        .cycles_days
        .iter()
        .zip(&logs)
        .map(|(&period_days, &l)| {
            let position = if span > 0.0 { (l - lo) / span } else { 0.0 };
            Ring {
                period_days,
                radius: INNER_RADIUS + (OUTER_RADIUS - INNER_RADIUS) * (1.0 - position),
            }
        })
        .collect();

    let spokes = params
        .gann_angles_deg
        .iter()
        .map(|&angle_deg| Spoke {
            angle_deg,
            theta: angle_deg.to_radians(),
        })
        .collect();

    let spiral = (0..SPIRAL_SAMPLES)
        .map(|i| {
            let u = i as f64 / (SPIRAL_SAMPLES - 1) as f64;
            let theta = 2.0 * PI * u + 2.0 * PI * params.spiral_rate * u;
            (theta, INNER_RADIUS + (OUTER_RADIUS - INNER_RADIUS) * u)
        })
        .collect();

    Ok(WheelGeometry {
        rings,
        spokes,
        spiral,
    })
}
