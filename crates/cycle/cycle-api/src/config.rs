//! Configuration sections for the cycle analysis stack.

use cycle_core::{
    DecisionBands, ForecastParams, GannParams, HarmonicSynthesizer, KozyrevParams, LombScargle,
    ResonanceEngine, RollingEntropy, WheelParams,
};
use cycle_spi::{CycleError, DegenerateBasisPolicy, FrequencyGrid, Result};
use serde::{Deserialize, Serialize};

fn missing(key: &str) -> CycleError {
    CycleError::invalid_input(format!("missing configuration key '{}'", key))
}

/// Frequency grid and peak extraction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub min_period_days: f64,
    pub max_period_days: f64,
    pub grid_size: usize,
    pub top_k: usize,
    pub degenerate_basis: DegenerateBasisPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_period_days: 5.0,
            max_period_days: 720.0,
            grid_size: 3000,
            top_k: 8,
            degenerate_basis: DegenerateBasisPolicy::Floor,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(CycleError::invalid_parameter("scan.top_k", "must be at least 1"));
        }
        self.grid().map(|_| ())
    }

    pub fn grid(&self) -> Result<FrequencyGrid> {
        FrequencyGrid::from_period_range(self.min_period_days, self.max_period_days, self.grid_size)
    }

    pub fn estimator(&self) -> LombScargle {
        LombScargle::with_policy(self.degenerate_basis)
    }
}

/// Rolling entropy and coherence weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoherenceConfig {
    pub entropy_window: usize,
    pub entropy_bins: usize,
    pub lambda: f64,
}

impl Default for CoherenceConfig {
    fn default() -> Self {
        Self {
            entropy_window: 30,
            entropy_bins: 20,
            lambda: 1.0,
        }
    }
}

impl CoherenceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.entropy_window == 0 {
            return Err(CycleError::invalid_parameter(
                "coherence.entropy_window",
                "must be at least 1",
            ));
        }
        if self.entropy_bins == 0 {
            return Err(CycleError::invalid_parameter(
                "coherence.entropy_bins",
                "must be at least 1",
            ));
        }
        if !self.lambda.is_finite() {
            return Err(CycleError::invalid_parameter("coherence.lambda", "must be finite"));
        }
        Ok(())
    }

    pub fn estimator(&self) -> Result<RollingEntropy> {
        RollingEntropy::new(self.entropy_window, self.entropy_bins)
    }
}

/// Cycle lengths of the Dewey field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeweyConfig {
    pub cycles_days: Vec<f64>,
}

/// Sample horizon and decision thresholds of the resonance index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResonanceConfig {
    /// Keep only this many trailing samples
    pub time_horizon_days: Option<usize>,
    pub threshold_pos: f64,
    pub threshold_neg: f64,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            time_horizon_days: None,
            threshold_pos: 1.0,
            threshold_neg: -1.0,
        }
    }
}

impl ResonanceConfig {
    pub fn bands(&self) -> Result<DecisionBands> {
        DecisionBands::new(self.threshold_pos, self.threshold_neg)
    }
}

/// Wheel layout; unset lists fall back to the Dewey and forecast sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub cycles_days: Option<Vec<f64>>,
    pub gann_angles_deg: Vec<f64>,
    pub spiral_rate: Option<f64>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            cycles_days: None,
            gann_angles_deg: (0..8).map(|i| i as f64 * 45.0).collect(),
            spiral_rate: None,
        }
    }
}

/// Every analysis section of the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    pub scan: ScanConfig,
    pub forecast: Option<ForecastParams>,
    pub gann: Option<GannParams>,
    pub kozyrev: Option<KozyrevParams>,
    pub dewey: Option<DeweyConfig>,
    pub coherence: CoherenceConfig,
    pub resonance: ResonanceConfig,
    pub wheel: WheelConfig,
}

impl CycleConfig {
    /// Validate the sections that have no command-specific requirements.
    pub fn validate(&self) -> Result<()> {
        self.scan.validate()?;
        self.coherence.validate()?;
        self.resonance.bands()?;
        if let Some(forecast) = &self.forecast {
            forecast.validate()?;
        }
        Ok(())
    }

    pub fn forecast_params(&self) -> Result<&ForecastParams> {
        let params = self.forecast.as_ref().ok_or_else(|| missing("forecast"))?;
        params.validate()?;
        Ok(params)
    }

    pub fn synthesizer(&self) -> Result<HarmonicSynthesizer> {
        let gann = self.gann.clone().ok_or_else(|| missing("gann"))?;
        let kozyrev = self.kozyrev.ok_or_else(|| missing("kozyrev"))?;
        let dewey = self.dewey.as_ref().ok_or_else(|| missing("dewey"))?;
        self.coherence.validate()?;
        HarmonicSynthesizer::new(gann, kozyrev, dewey.cycles_days.clone(), self.coherence.lambda)
    }

    pub fn resonance_engine(&self) -> Result<ResonanceEngine> {
        Ok(ResonanceEngine::new(
            self.synthesizer()?,
            self.coherence.estimator()?,
            self.resonance.bands()?,
        )
        .with_horizon(self.resonance.time_horizon_days))
    }

    pub fn wheel_params(&self) -> Result<WheelParams> {
        let cycles_days = match (&self.wheel.cycles_days, &self.dewey) {
            (Some(cycles), _) => cycles.clone(),
            (None, Some(dewey)) => dewey.cycles_days.clone(),
            (None, None) => return Err(missing("wheel.cycles_days")),
        };
        let spiral_rate = self
            .wheel
            .spiral_rate
            .or_else(|| self.forecast.as_ref().map(|f| f.kozyrev_phase_rate))
            .unwrap_or(0.0);

        Ok(WheelParams {
            cycles_days,
            gann_angles_deg: self.wheel.gann_angles_deg.clone(),
            spiral_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
scan:
  top_k: 5
forecast:
  cycles_days: [30, 90, 360]
gann:
  amplitudes: [1.0, 0.5]
  periods_days: [90, 180]
  phases_deg: [0, 45]
kozyrev:
  alpha: 0.0008
  beta: 0.03
dewey:
  cycles_days: [41, 54, 144]
coherence:
  entropy_window: 20
  lambda: 0.7
resonance:
  time_horizon_days: 500
  threshold_pos: 1.2
  threshold_neg: -0.8
"#;

    #[test]
    fn test_defaults() {
        let config: CycleConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.scan, ScanConfig::default());
        assert_eq!(config.scan.grid_size, 3000);
        assert_eq!(config.scan.top_k, 8);
        assert_eq!(config.coherence.entropy_window, 30);
        assert_eq!(config.coherence.entropy_bins, 20);
        assert_eq!(config.wheel.gann_angles_deg.len(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_document() {
        let config: CycleConfig = serde_yaml::from_str(FULL).unwrap();
        assert_eq!(config.scan.top_k, 5);
        assert_eq!(config.scan.max_period_days, 720.0);
        assert_eq!(config.coherence.entropy_bins, 20);
        assert_eq!(config.resonance.time_horizon_days, Some(500));

        let forecast = config.forecast_params().unwrap();
        assert_eq!(forecast.horizon_days, 300);
        assert_eq!(forecast.kozyrev_phase_rate, 0.002);

        assert!(config.resonance_engine().is_ok());

        let wheel = config.wheel_params().unwrap();
        assert_eq!(wheel.cycles_days, vec![41.0, 54.0, 144.0]);
        assert_eq!(wheel.spiral_rate, 0.002);
    }

    #[test]
    fn test_missing_sections_name_the_key() {
        let config = CycleConfig::default();
        let err = config.synthesizer().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: missing configuration key 'gann'");
        assert!(config.forecast_params().is_err());
        assert!(config.wheel_params().is_err());
    }

    #[test]
    fn test_invalid_sections() {
        let mut config = CycleConfig::default();
        config.scan.top_k = 0;
        assert!(config.validate().is_err());

        let mut config = CycleConfig::default();
        config.scan.min_period_days = 800.0;
        assert!(config.validate().is_err());

        let mut config = CycleConfig::default();
        config.resonance.threshold_neg = 2.0;
        assert!(config.validate().is_err());

        let mut config = CycleConfig::default();
        config.coherence.entropy_bins = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_policy_from_yaml() {
        let config: CycleConfig = serde_yaml::from_str("scan:\n  degenerate_basis: reject\n").unwrap();
        assert_eq!(config.scan.degenerate_basis, DegenerateBasisPolicy::Reject);
        assert_eq!(config.scan.estimator().policy(), DegenerateBasisPolicy::Reject);
    }
}
