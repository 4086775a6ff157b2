//! Periodogram chart.

use crate::error::{RenderError, Result};
use crate::style::{padded_range, ACCENT, CAPTION_SIZE, FONT, LABEL_SIZE, SERIES, WIDE};
use cycle_core::Peak;
use plotters::prelude::*;
use std::path::Path;

const CHART: &str = "scan";

/// Power against period with each peak marked and labelled.
pub fn render_spectrum(path: &Path, periods: &[f64], power: &[f64], peaks: &[Peak]) -> Result<()> {
    if periods.is_empty() || periods.len() != power.len() {
        return Err(RenderError::EmptyData(CHART.to_string()));
    }
    let x_range = padded_range(periods.iter().copied());
    let y_range = padded_range(power.iter().copied());
    let floor = y_range.start;

    let root = SVGBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| RenderError::draw(CHART, e))?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption("Lomb-Scargle Cycle Scan", (FONT, CAPTION_SIZE))
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 45)
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| RenderError::draw(CHART, e))?;

        chart
            .configure_mesh()
            .x_desc("Period (days)")
            .y_desc("Power (norm)")
            .draw()
            .map_err(|e| RenderError::draw(CHART, e))?;

        chart
            .draw_series(LineSeries::new(
                periods.iter().copied().zip(power.iter().copied()),
                SERIES.stroke_width(1),
            ))
            .map_err(|e| RenderError::draw(CHART, e))?;

        for peak in peaks {
            chart
                .draw_series(LineSeries::new(
                    vec![(peak.period_days, floor), (peak.period_days, peak.power)],
                    ACCENT.mix(0.6).stroke_width(1),
                ))
                .map_err(|e| RenderError::draw(CHART, e))?;
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{:.1}d", peak.period_days),
                    (peak.period_days, peak.power),
                    (FONT, LABEL_SIZE).into_font(),
                )))
                .map_err(|e| RenderError::draw(CHART, e))?;
        }
    }

    root.present().map_err(|e| RenderError::draw(CHART, e))?;
    tracing::debug!(path = %path.display(), peaks = peaks.len(), "scan chart rendered");
    Ok(())
}
