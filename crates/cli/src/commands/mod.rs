//! One module per subcommand.

pub mod forecast;
pub mod resonance;
pub mod scan;
pub mod wheel;
