//! `emerald wheel`: harmonic wheel layout.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use cycle_facade::build_wheel;
use data_facade::ensure_dir;
use tracing::info;

pub const CHART_FILE: &str = "harmonic_wheel.svg";

pub fn run(config: &AppConfig) -> Result<()> {
    let params = config.cycle.wheel_params()?;
    let geometry = build_wheel(&params).context("wheel layout failed")?;

    ensure_dir(&config.output_dir)?;
    let chart_path = config.output_path(CHART_FILE);
    render::render_wheel(&chart_path, &geometry)?;
    info!(
        path = %chart_path.display(),
        rings = geometry.rings.len(),
        spokes = geometry.spokes.len(),
        "wheel chart written"
    );
    Ok(())
}
