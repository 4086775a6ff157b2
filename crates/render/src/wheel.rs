//! Harmonic wheel chart.

use crate::error::{RenderError, Result};
use crate::style::{CAPTION_SIZE, FONT, LABEL_SIZE, RING, SPIRAL, SPOKE, SQUARE};
use cycle_core::wheel::{INNER_RADIUS, OUTER_RADIUS};
use cycle_core::{polar_to_cartesian, WheelGeometry};
use plotters::prelude::*;
use std::path::Path;

const CHART: &str = "wheel";
const EXTENT: f64 = 1.15;
const LABEL_RADIUS: f64 = 1.04;

/// Rings, spokes and spiral on a north-up, clockwise polar layout.
pub fn render_wheel(path: &Path, geometry: &WheelGeometry) -> Result<()> {
    if geometry.rings.is_empty() {
        return Err(RenderError::EmptyData(CHART.to_string()));
    }

    let root = SVGBackend::new(path, SQUARE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| RenderError::draw(CHART, e))?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(
                "Harmonic Wheel (Gann / Kozyrev / Dewey)",
                (FONT, CAPTION_SIZE),
            )
            .build_cartesian_2d(-EXTENT..EXTENT, -EXTENT..EXTENT)
            .map_err(|e| RenderError::draw(CHART, e))?;

        for ring in &geometry.rings {
            let circle = (0..=360).map(|deg| polar_to_cartesian((deg as f64).to_radians(), ring.radius));
            chart
                .draw_series(LineSeries::new(circle, RING.stroke_width(1)))
                .map_err(|e| RenderError::draw(CHART, e))?;
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{}d", ring.period_days),
                    (0.01, ring.radius),
                    (FONT, LABEL_SIZE).into_font(),
                )))
                .map_err(|e| RenderError::draw(CHART, e))?;
        }

        for spoke in &geometry.spokes {
            chart
                .draw_series(LineSeries::new(
                    vec![
                        polar_to_cartesian(spoke.theta, INNER_RADIUS),
                        polar_to_cartesian(spoke.theta, OUTER_RADIUS),
                    ],
                    SPOKE.stroke_width(2),
                ))
                .map_err(|e| RenderError::draw(CHART, e))?;
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{}°", spoke.angle_deg),
                    polar_to_cartesian(spoke.theta, LABEL_RADIUS),
                    (FONT, LABEL_SIZE).into_font(),
                )))
                .map_err(|e| RenderError::draw(CHART, e))?;
        }

        chart
            .draw_series(LineSeries::new(
                geometry
                    .spiral
                    .iter()
                    .map(|&(theta, radius)| polar_to_cartesian(theta, radius)),
                SPIRAL.stroke_width(1),
            ))
            .map_err(|e| RenderError::draw(CHART, e))?;
    }

    root.present().map_err(|e| RenderError::draw(CHART, e))?;
    tracing::debug!(
        path = %path.display(),
        rings = geometry.rings.len(),
        spokes = geometry.spokes.len(),
        "wheel chart rendered"
    );
    Ok(())
}
