//! Renderer
//!
//! Draws the numeric outputs of the cycle stack as SVG charts. Rendering is
//! a pure consumer: nothing here feeds back into the analysis.

mod error;
mod forecast;
mod spectrum;
mod style;
mod uri;
mod wheel;

pub use error::{RenderError, Result};
pub use forecast::render_forecast;
pub use spectrum::render_spectrum;
pub use uri::render_uri;
pub use wheel::render_wheel;
