//! Harmonic forecast chart.

use crate::error::{RenderError, Result};
use crate::style::{padded_range, ACCENT, CAPTION_SIZE, FONT, SERIES, WIDE};
use cycle_core::HarmonicForecast;
use plotters::prelude::*;
use std::path::Path;

const CHART: &str = "forecast";

/// Normalized actuals and the composite over past and projected days, with
/// a marker where the projection starts.
pub fn render_forecast(path: &Path, forecast: &HarmonicForecast) -> Result<()> {
    if forecast.days.is_empty() {
        return Err(RenderError::EmptyData(CHART.to_string()));
    }
    let x_range = padded_range(forecast.days.iter().copied());
    let y_range = padded_range(
        forecast
            .observed
            .iter()
            .chain(&forecast.composite)
            .copied(),
    );
    let (y_lo, y_hi) = (y_range.start, y_range.end);
    let split = forecast.forecast_start as f64;

    let root = SVGBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| RenderError::draw(CHART, e))?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption("Harmonic Composite Forecast (Past + Forward)", (FONT, CAPTION_SIZE))
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 45)
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| RenderError::draw(CHART, e))?;

        chart
            .configure_mesh()
            .x_desc("Days since first sample")
            .draw()
            .map_err(|e| RenderError::draw(CHART, e))?;

        chart
            .draw_series(LineSeries::new(
                forecast
                    .observed_days
                    .iter()
                    .copied()
                    .zip(forecast.observed.iter().copied())
                    .filter(|(_, v)| v.is_finite()),
                SERIES.stroke_width(1),
            ))
            .map_err(|e| RenderError::draw(CHART, e))?
            .label("Actual (norm)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SERIES.stroke_width(2)));

        chart
            .draw_series(LineSeries::new(
                forecast
                    .days
                    .iter()
                    .copied()
                    .zip(forecast.composite.iter().copied()),
                ACCENT.stroke_width(1),
            ))
            .map_err(|e| RenderError::draw(CHART, e))?
            .label("Composite (cycles + Kozyrev)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ACCENT.stroke_width(2)));

        chart
            .draw_series(LineSeries::new(
                vec![(split, y_lo), (split, y_hi)],
                BLACK.mix(0.4).stroke_width(1),
            ))
            .map_err(|e| RenderError::draw(CHART, e))?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| RenderError::draw(CHART, e))?;
    }

    root.present().map_err(|e| RenderError::draw(CHART, e))?;
    tracing::debug!(path = %path.display(), days = forecast.days.len(), "forecast chart rendered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cycle_core::{harmonic_forecast, ForecastParams};
    use tempfile::tempdir;

    #[test]
    fn test_writes_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forecast.svg");
        let t: Vec<f64> = (0..120).map(|d| d as f64).collect();
        let y: Vec<f64> = t.iter().map(|d| (d / 7.0).sin()).collect();
        let mut params = ForecastParams::new(vec![30.0, 90.0]);
        params.horizon_days = 40;
        let forecast = harmonic_forecast(&t, &y, &params).unwrap();

        render_forecast(&path, &forecast).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Actual (norm)"));
    }
}
