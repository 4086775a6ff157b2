//! Resonance index chart.

use crate::error::{RenderError, Result};
use crate::style::{padded_range, CAPTION_SIZE, FONT, SERIES, WIDE};
use cycle_core::DecisionBands;
use plotters::prelude::*;
use std::path::Path;

const CHART: &str = "uri";

/// Index against day offset with both decision thresholds drawn across.
pub fn render_uri(path: &Path, t: &[f64], index: &[f64], bands: &DecisionBands) -> Result<()> {
    if t.is_empty() || t.len() != index.len() {
        return Err(RenderError::EmptyData(CHART.to_string()));
    }
    let x_range = padded_range(t.iter().copied());
    let y_range = padded_range(
        index
            .iter()
            .copied()
            .chain([bands.threshold_pos, bands.threshold_neg]),
    );
    let (x_lo, x_hi) = (x_range.start, x_range.end);

    let root = SVGBackend::new(path, WIDE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| RenderError::draw(CHART, e))?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption("Unified Resonance Index (URI)", (FONT, CAPTION_SIZE))
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 45)
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| RenderError::draw(CHART, e))?;

        chart
            .configure_mesh()
            .x_desc("Days since first sample")
            .y_desc("URI (normalized)")
            .draw()
            .map_err(|e| RenderError::draw(CHART, e))?;

        chart
            .draw_series(LineSeries::new(
                t.iter()
                    .copied()
                    .zip(index.iter().copied())
                    .filter(|(_, v)| v.is_finite()),
                SERIES.stroke_width(1),
            ))
            .map_err(|e| RenderError::draw(CHART, e))?;

        for (level, color) in [(bands.threshold_pos, GREEN), (bands.threshold_neg, RED)] {
            chart
                .draw_series(LineSeries::new(
                    vec![(x_lo, level), (x_hi, level)],
                    color.mix(0.6).stroke_width(1),
                ))
                .map_err(|e| RenderError::draw(CHART, e))?;
        }
    }

    root.present().map_err(|e| RenderError::draw(CHART, e))?;
    tracing::debug!(path = %path.display(), samples = t.len(), "uri chart rendered");
    Ok(())
}
