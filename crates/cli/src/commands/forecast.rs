//! `emerald forecast`: harmonic composite over the observed span and beyond.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use cycle_facade::harmonic_forecast;
use data_facade::{ensure_dir, load_series, write_csv, ForecastRow};
use tracing::info;

pub const TABLE_FILE: &str = "harmonic_forecast.csv";
pub const CHART_FILE: &str = "harmonic_forecast.svg";

pub fn run(config: &AppConfig) -> Result<()> {
    let params = config.cycle.forecast_params()?;
    let input = config.input()?;
    let series = load_series(input)
        .with_context(|| format!("failed to load {}", input.csv_path.display()))?;
    info!(samples = series.len(), "series loaded");

    let forecast = harmonic_forecast(&series.t, &series.detrended, params)
        .context("harmonic forecast failed")?;

    let rows: Vec<ForecastRow> = forecast
        .days
        .iter()
        .zip(&forecast.composite)
        .zip(forecast.observed_on_axis())
        .map(|((&day, &composite), actual_norm)| ForecastRow {
            day,
            actual_norm,
            composite,
        })
        .collect();

    ensure_dir(&config.output_dir)?;
    let table_path = config.output_path(TABLE_FILE);
    write_csv(&table_path, &rows)?;
    info!(path = %table_path.display(), rows = rows.len(), "forecast table written");

    let chart_path = config.output_path(CHART_FILE);
    render::render_forecast(&chart_path, &forecast)?;
    info!(
        path = %chart_path.display(),
        forecast_start = forecast.forecast_start,
        horizon_days = params.horizon_days,
        "forecast chart written"
    );
    Ok(())
}
