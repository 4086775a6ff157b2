//! Synthetic oscillatory fields and the composite resonance index.
//!
//! Every field is a deterministic function of the day axis `t` and its
//! parameters, aligned index-for-index with `t`.

use crate::normalize::normalize;
use cycle_spi::{CycleError, ResonanceComponents, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parallel amplitude / period / phase lists of a Gann field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GannParams {
    pub amplitudes: Vec<f64>,
    pub periods_days: Vec<f64>,
    /// Phase offsets in degrees
    pub phases_deg: Vec<f64>,
}

/// Decay and oscillation rates of a Kozyrev field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KozyrevParams {
    pub alpha: f64,
    pub beta: f64,
}

pub(crate) fn ensure_finite(name: &str, values: &[f64]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(CycleError::invalid_input(format!("{} contains non-finite values", name)));
    }
    Ok(())
}

pub(crate) fn ensure_positive_periods(name: &str, periods: &[f64]) -> Result<()> {
    if let Some(bad) = periods.iter().find(|p| !p.is_finite() || **p <= 0.0) {
        return Err(CycleError::invalid_parameter(
            name,
            format!("periods must be finite and positive, got {}", bad),
        ));
    }
    Ok(())
}

/// `Σ Aᵢ·sin(2π/Pᵢ·t + φᵢ)` with phases given in degrees.
pub fn gann_field(
    t: &[f64],
    amplitudes: &[f64],
    periods: &[f64],
    phases_deg: &[f64],
) -> Result<Vec<f64>> {
    if amplitudes.len() != periods.len() || periods.len() != phases_deg.len() {
        return Err(CycleError::invalid_input(format!(
            "amplitude/period/phase sequence length mismatch ({}/{}/{})",
            amplitudes.len(),
            periods.len(),
            phases_deg.len()
        )));
    }
    ensure_positive_periods("gann.periods_days", periods)?;
    ensure_finite("t", t)?;

    let terms: Vec<(f64, f64, f64)> = amplitudes
        .iter()
        .zip(periods)
        .zip(phases_deg)
        .map(|((&a, &p), &ph)| (a, 2.0 * PI / p, ph.to_radians()))
        .collect();

    Ok(t.iter()
        .map(|&ti| {
            terms
                .iter()
                .map(|&(a, w, phi)| a * (w * ti + phi).sin())
                .sum::<f64>()
        })
        .collect())
}

/// `exp(-α·t)·cos(β·t)`.
pub fn kozyrev_field(t: &[f64], alpha: f64, beta: f64) -> Result<Vec<f64>> {
    if !alpha.is_finite() || !beta.is_finite() {
        return Err(CycleError::invalid_parameter(
            "kozyrev",
            format!("alpha and beta must be finite, got {} and {}", alpha, beta),
        ));
    }
    ensure_finite("t", t)?;
    Ok(t.iter().map(|&ti| (-alpha * ti).exp() * (beta * ti).cos()).collect())
}

/// Unweighted `Σ_T sin(2π·t/T)` over the cycle lengths.
pub fn dewey_field(t: &[f64], cycles: &[f64]) -> Result<Vec<f64>> {
    ensure_positive_periods("dewey.cycles_days", cycles)?;
    ensure_finite("t", t)?;
    Ok(t.iter()
        .map(|&ti| cycles.iter().map(|&c| (2.0 * PI * ti / c).sin()).sum::<f64>())
        .collect())
}

/// `exp(-λ·normalize(entropy))`; lower entropy gives higher weight when λ > 0.
pub fn coherence_field(entropy: &[f64], lambda: f64) -> Result<Vec<f64>> {
    if !lambda.is_finite() {
        return Err(CycleError::invalid_parameter("lambda", "must be finite"));
    }
    Ok(normalize(entropy)
        .into_iter()
        .map(|e| (-lambda * e).exp())
        .collect())
}

/// Normalized elementwise product `G·K·D·C`.
pub fn composite_index(gann: &[f64], kozyrev: &[f64], dewey: &[f64], coherence: &[f64]) -> Result<Vec<f64>> {
    let n = gann.len();
    if kozyrev.len() != n || dewey.len() != n || coherence.len() != n {
        return Err(CycleError::invalid_input(format!(
            "field length mismatch (gann={}, kozyrev={}, dewey={}, coherence={})",
            n,
            kozyrev.len(),
            dewey.len(),
            coherence.len()
        )));
    }

    let product: Vec<f64> = (0..n)
        .map(|i| gann[i] * kozyrev[i] * dewey[i] * coherence[i])
        .collect();
    Ok(normalize(&product))
}

/// Builds all resonance fields from one parameter set.
#[derive(Debug, Clone)]
pub struct HarmonicSynthesizer {
    gann: GannParams,
    kozyrev: KozyrevParams,
    dewey_cycles: Vec<f64>,
    lambda: f64,
}

impl HarmonicSynthesizer {
    /// Validate the parameter set up front so synthesis only fails on input.
    pub fn new(gann: GannParams, kozyrev: KozyrevParams, dewey_cycles: Vec<f64>, lambda: f64) -> Result<Self> {
        // An empty axis checks list lengths and periods without evaluating anything
        gann_field(&[], &gann.amplitudes, &gann.periods_days, &gann.phases_deg)?;
        kozyrev_field(&[], kozyrev.alpha, kozyrev.beta)?;
        dewey_field(&[], &dewey_cycles)?;
        coherence_field(&[], lambda)?;
        Ok(Self {
            gann,
            kozyrev,
            dewey_cycles,
            lambda,
        })
    }

    /// Every field over `t` plus the composite index.
    ///
    /// `entropy` is the rolling entropy of the series sampled at `t`.
    pub fn synthesize(&self, t: &[f64], entropy: &[f64]) -> Result<ResonanceComponents> {
        let gann = gann_field(
            t,
            &self.gann.amplitudes,
            &self.gann.periods_days,
            &self.gann.phases_deg,
        )?;
        let kozyrev = kozyrev_field(t, self.kozyrev.alpha, self.kozyrev.beta)?;
        let dewey = dewey_field(t, &self.dewey_cycles)?;
        let coherence = coherence_field(entropy, self.lambda)?;
        let index = composite_index(&gann, &kozyrev, &dewey, &coherence)?;

        Ok(ResonanceComponents {
            gann,
            kozyrev,
            dewey,
            coherence,
            index,
        })
    }
}
