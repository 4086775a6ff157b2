//! Contract module containing trait definitions for cycle analysis

mod entropy_estimator;
mod spectral_estimator;

pub use entropy_estimator::EntropyEstimator;
pub use spectral_estimator::SpectralEstimator;
