//! Cycle Consumer API
//!
//! Configuration sections and builders for the cycle analysis stack.
//!
//! This crate provides:
//! - Serde configuration sections with the documented defaults
//! - Builders turning those sections into ready-to-run core components
//! - Re-exports from SPI and core for convenience

mod config;

pub use config::{
    CoherenceConfig, CycleConfig, DeweyConfig, ResonanceConfig, ScanConfig, WheelConfig,
};

// Re-export from core
pub use cycle_core::{
    bands, entropy, forecast, harmonic, normalize, resonance, spectral, wheel, DecisionBands,
    ForecastParams, GannParams, HarmonicForecast, HarmonicSynthesizer, KozyrevParams,
    LombScargle, ResonanceEngine, ResonanceReport, RollingEntropy, WheelGeometry, WheelParams,
};

// Re-export traits from SPI
pub use cycle_spi::{
    CycleError, DegenerateBasisPolicy, EntropyEstimator, ErrorKind, FrequencyGrid, Peak,
    PowerSpectrum, ResonanceBand, ResonanceComponents, Result, SpectralEstimator,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CoherenceConfig, CycleConfig, DeweyConfig, ResonanceConfig, ScanConfig, WheelConfig,
    };
    pub use cycle_core::{
        DecisionBands, ForecastParams, GannParams, HarmonicSynthesizer, KozyrevParams,
        LombScargle, ResonanceEngine, RollingEntropy, WheelParams,
    };
    pub use cycle_spi::{
        CycleError, EntropyEstimator, FrequencyGrid, Peak, PowerSpectrum, Result,
        SpectralEstimator,
    };
}
