//! Cycle Core
//!
//! Implementations of the cycle analysis stack:
//!
//! - [`spectral`]: Lomb-Scargle scan over a frequency grid and top-k peaks
//! - [`entropy`]: rolling-window Shannon entropy
//! - [`harmonic`]: Gann, Kozyrev, Dewey and coherence fields, composite index
//! - [`normalize`]: z-score normalization
//! - [`forecast`]: harmonic composite forecast with phase drift
//! - [`bands`]: decision bands over the index
//! - [`resonance`]: full resonance pipeline over one series
//! - [`wheel`]: harmonic wheel geometry

pub mod bands;
pub mod entropy;
pub mod forecast;
pub mod harmonic;
pub mod normalize;
pub mod resonance;
pub mod spectral;
pub mod wheel;

// Re-export SPI types for implementations
pub use cycle_spi::{
    CycleError, DegenerateBasisPolicy, EntropyEstimator, ErrorKind, FrequencyGrid, Peak,
    PowerSpectrum, ResonanceBand, ResonanceComponents, Result, SpectralEstimator,
};

// Re-export main types
pub use bands::DecisionBands;
pub use entropy::{raw_rolling_entropy, rolling_entropy, window_entropy, RollingEntropy};
pub use forecast::{harmonic_composite, harmonic_forecast, kozyrev_bias, ForecastParams, HarmonicForecast};
pub use harmonic::{
    coherence_field, composite_index, dewey_field, gann_field, kozyrev_field, GannParams,
    HarmonicSynthesizer, KozyrevParams,
};
pub use normalize::{finite_mean_std, normalize};
pub use resonance::{trailing_start, ResonanceEngine, ResonanceReport};
pub use spectral::{scan, scan_with_policy, top_k, top_k_indices, LombScargle};
pub use wheel::{build_wheel, polar_to_cartesian, Ring, Spoke, WheelGeometry, WheelParams};
