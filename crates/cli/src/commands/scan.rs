//! `emerald scan`: dominant cycles of the detrended series.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use cycle_facade::{normalize, top_k, Peak, PowerSpectrum, SpectralEstimator};
use data_facade::{ensure_dir, load_series, write_json};
use tracing::info;

pub const PEAKS_FILE: &str = "dominant_cycles.json";
pub const CHART_FILE: &str = "lomb_scargle_scan.svg";

pub fn run(config: &AppConfig) -> Result<()> {
    let input = config.input()?;
    let series = load_series(input)
        .with_context(|| format!("failed to load {}", input.csv_path.display()))?;
    info!(samples = series.len(), "series loaded");

    let scan = &config.cycle.scan;
    let grid = scan.grid()?;
    let spectrum = scan
        .estimator()
        .power_spectrum(&series.t, &series.detrended, &grid)
        .context("spectral scan failed")?;

    // Peaks and chart share the z-scored power
    let normalized = PowerSpectrum::new(grid, normalize(spectrum.power()))?;
    let peaks = top_k(&normalized, scan.top_k);
    info!(cycles = %cycle_summary(&peaks), "dominant cycles");

    ensure_dir(&config.output_dir)?;
    let peaks_path = config.output_path(PEAKS_FILE);
    write_json(&peaks_path, &peaks)?;
    info!(path = %peaks_path.display(), "peaks written");

    let chart_path = config.output_path(CHART_FILE);
    render::render_spectrum(&chart_path, normalized.periods(), normalized.power(), &peaks)?;
    info!(path = %chart_path.display(), "scan chart written");

    println!("{:>4}  {:>12}  {:>10}", "rank", "period_days", "power");
    for (rank, peak) in peaks.iter().enumerate() {
        println!("{:>4}  {:>12.2}  {:>10.4}", rank + 1, peak.period_days, peak.power);
    }
    Ok(())
}

fn cycle_summary(peaks: &[Peak]) -> String {
    peaks
        .iter()
        .map(|p| format!("{:.1}d", p.period_days))
        .collect::<Vec<_>>()
        .join(", ")
}
