//! Cycle Analysis Service Provider Interface
//!
//! Defines the data model, error types and contracts shared by the spectral
//! scanner, the rolling entropy estimator and the harmonic synthesizer.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{EntropyEstimator, SpectralEstimator};
pub use error::{CycleError, ErrorKind, Result};
pub use model::{
    DegenerateBasisPolicy, FrequencyGrid, Peak, PowerSpectrum, ResonanceBand,
    ResonanceComponents,
};
