//! Least-squares linear detrending.

/// Fit `y ≈ slope·t + intercept`. `None` when lengths differ, the input is
/// empty or `t` has no spread.
pub fn linear_fit(t: &[f64], y: &[f64]) -> Option<(f64, f64)> {
    if t.is_empty() || t.len() != y.len() {
        return None;
    }
    let n = t.len() as f64;
    let mean_t = t.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (sxx, sxy) = t
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxx, sxy), (&ti, &yi)| {
            let dt = ti - mean_t;
            (sxx + dt * dt, sxy + dt * (yi - mean_y))
        });
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_t))
}

/// Subtract the fitted line. Series of two samples or fewer pass through;
/// a degenerate fit falls back to removing the mean.
pub fn detrend(t: &[f64], y: &[f64]) -> Vec<f64> {
    if y.len() <= 2 {
        return y.to_vec();
    }
    match linear_fit(t, y) {
        Some((slope, intercept)) => t
            .iter()
            .zip(y)
            .map(|(&ti, &yi)| yi - (slope * ti + intercept))
            .collect(),
        None => {
            let mean = y.iter().sum::<f64>() / y.len() as f64;
            y.iter().map(|v| v - mean).collect()
        }
    }
}
