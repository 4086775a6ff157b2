//! Model module containing data structures

mod frequency_grid;
mod power_spectrum;
mod resonance;

pub use frequency_grid::FrequencyGrid;
pub use power_spectrum::{DegenerateBasisPolicy, Peak, PowerSpectrum};
pub use resonance::{ResonanceBand, ResonanceComponents};
