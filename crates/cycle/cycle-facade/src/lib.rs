//! Cycle Facade
//!
//! High-level API for spectral cycle analysis. Re-exports all public types
//! from the cycle stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use cycle_api::*;

// Explicit re-exports for documentation
pub use cycle_api::prelude;

// Free functions at the root
pub use cycle_core::{
    build_wheel, coherence_field, composite_index, dewey_field, gann_field, harmonic_composite,
    harmonic_forecast, kozyrev_bias, kozyrev_field, polar_to_cartesian, raw_rolling_entropy,
    rolling_entropy, scan, scan_with_policy, top_k, top_k_indices, trailing_start,
    window_entropy,
};
pub use cycle_core::normalize::{finite_mean_std, normalize};

// Re-export SPI contracts
pub use cycle_spi::{EntropyEstimator, SpectralEstimator};
