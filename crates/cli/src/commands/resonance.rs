//! `emerald resonance`: unified resonance index with its component fields.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use cycle_facade::ResonanceBand;
use data_facade::{ensure_dir, load_series, write_csv, ComponentRow, LoadedSeries};
use tracing::info;

pub const TABLE_FILE: &str = "uri_components.csv";
pub const CHART_FILE: &str = "uri_timeseries.svg";

pub fn run(config: &AppConfig) -> Result<()> {
    let engine = config.cycle.resonance_engine()?;
    let bands = config.cycle.resonance.bands()?;
    let input = config.input()?;
    let series = load_series(input)
        .with_context(|| format!("failed to load {}", input.csv_path.display()))?;
    info!(samples = series.len(), "series loaded");

    let report = engine
        .run(&series.t, &series.detrended)
        .context("resonance index failed")?;
    let offset = report.offset;
    let c = &report.components;

    let rows: Vec<ComponentRow> = (0..c.len())
        .map(|i| {
            let j = offset + i;
            ComponentRow {
                date: LoadedSeries::format_date(&series.dates[j]),
                price: series.raw[j],
                detrended: series.detrended[j],
                uri: c.index[i],
                gann: c.gann[i],
                kozyrev: c.kozyrev[i],
                dewey: c.dewey[i],
                coherence: c.coherence[i],
                band: report.bands[i].as_str().to_string(),
            }
        })
        .collect();

    ensure_dir(&config.output_dir)?;
    let table_path = config.output_path(TABLE_FILE);
    write_csv(&table_path, &rows)?;
    info!(path = %table_path.display(), rows = rows.len(), "component table written");

    let chart_path = config.output_path(CHART_FILE);
    render::render_uri(&chart_path, &series.t[offset..], &c.index, &bands)?;
    info!(path = %chart_path.display(), "uri chart written");

    let above = report.bands.iter().filter(|b| **b == ResonanceBand::Above).count();
    let below = report.bands.iter().filter(|b| **b == ResonanceBand::Below).count();
    if let (Some(last), Some(row)) = (report.bands.last(), rows.last()) {
        info!(above, below, latest = %last, date = %row.date, uri = row.uri, "resonance bands");
    }
    Ok(())
}
