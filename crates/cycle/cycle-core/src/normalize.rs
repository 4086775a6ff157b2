//! Z-score normalization shared by every derived series.

/// Mean and population standard deviation over the finite entries of `x`.
///
/// Returns `None` when `x` has no finite entries.
pub fn finite_mean_std(x: &[f64]) -> Option<(f64, f64)> {
    let (sum, count) = x
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        return None;
    }

    let mean = sum / count as f64;
    let variance = x
        .iter()
        .filter(|v| v.is_finite())
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / count as f64;

    Some((mean, variance.sqrt()))
}

/// Subtract the mean and divide by the standard deviation.
///
/// Non-finite entries are ignored when computing the moments and stay
/// non-finite in the output. Constant input, or input with fewer than two
/// finite values, maps its finite entries to exactly zero.
pub fn normalize(x: &[f64]) -> Vec<f64> {
    let (lo, hi) = x
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let (mean, std_dev) = match finite_mean_std(x) {
        Some(moments) => moments,
        None => return x.to_vec(),
    };

    // The rounded mean of a constant leaves residuals of a few ulps
    if lo == hi {
        return x
            .iter()
            .map(|&v| if v.is_finite() { 0.0 } else { v })
            .collect();
    }

    let divisor = if std_dev > 0.0 && std_dev.is_finite() {
        std_dev
    } else {
        1.0
    };

    x.iter().map(|v| (v - mean) / divisor).collect()
}
