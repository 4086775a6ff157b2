//! Shared chart styling.

use plotters::style::RGBColor;
use std::ops::Range;

pub const FONT: &str = "sans-serif";
pub const CAPTION_SIZE: f64 = 22.0;
pub const LABEL_SIZE: f64 = 11.0;

pub const WIDE: (u32, u32) = (1100, 400);
pub const SQUARE: (u32, u32) = (800, 800);

pub const SERIES: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const ACCENT: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
pub const RING: RGBColor = RGBColor(0xaa, 0xaa, 0xaa);
pub const SPOKE: RGBColor = RGBColor(0xff, 0xd1, 0x66);
pub const SPIRAL: RGBColor = RGBColor(0x11, 0x8a, 0xb2);

/// Finite min..max of `values` with 5% headroom; a flat or empty input
/// gets a unit-wide range.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5)..(hi + 0.5);
    }
    (lo - 0.05 * span)..(hi + 0.05 * span)
}
