//! Integration tests for the cycle analysis facade

use cycle_facade::{
    dewey_field, finite_mean_std, gann_field, normalize, rolling_entropy, scan, top_k,
    CycleConfig, CycleError, ErrorKind, FrequencyGrid, LombScargle, SpectralEstimator,
};
use std::f64::consts::PI;

fn daily_axis(days: usize) -> Vec<f64> {
    (0..days).map(|d| d as f64).collect()
}

#[test]
fn test_spectrum_matches_grid_length() {
    let t = daily_axis(365);
    let y: Vec<f64> = t.iter().map(|d| (2.0 * PI * d / 73.0).sin()).collect();
    for size in [1, 17, 500] {
        let grid = FrequencyGrid::from_period_range(5.0, 720.0, size).unwrap();
        let power = scan(&t, &y, grid.angular_frequencies()).unwrap();
        assert_eq!(power.len(), size);
        assert!(power.iter().all(|p| p.is_finite() && *p >= 0.0));
    }
}

#[test]
fn test_dominant_fifty_day_cycle() {
    let t = daily_axis(1000);
    let y: Vec<f64> = t.iter().map(|d| (2.0 * PI * d / 50.0).sin()).collect();
    let grid = FrequencyGrid::from_period_range(5.0, 720.0, 3000).unwrap();
    let spectrum = LombScargle::new().power_spectrum(&t, &y, &grid).unwrap();

    let peaks = top_k(&spectrum, 8);
    assert_eq!(peaks.len(), 8);
    assert!((peaks[0].period_days - 50.0).abs() <= 2.0);
    for pair in peaks.windows(2) {
        assert!(pair[0].power >= pair[1].power);
    }
}

#[test]
fn test_two_cycles_both_reported() {
    let t = daily_axis(2000);
    let y: Vec<f64> = t
        .iter()
        .map(|d| 2.0 * (2.0 * PI * d / 120.0).sin() + (2.0 * PI * d / 30.0).sin())
        .collect();
    let grid = FrequencyGrid::from_period_range(5.0, 720.0, 3000).unwrap();
    let spectrum = LombScargle::new().power_spectrum(&t, &y, &grid).unwrap();

    let peaks = top_k(&spectrum, 1);
    assert!((peaks[0].period_days - 120.0).abs() <= 2.0);

    // Strongest bin between 25 and 35 days sits on the weaker cycle
    let (best_period, _) = spectrum
        .periods()
        .iter()
        .zip(spectrum.power())
        .filter(|(p, _)| (25.0..=35.0).contains(*p))
        .max_by(|a, b| a.1.total_cmp(b.1))
        .unwrap();
    assert!((best_period - 30.0).abs() <= 1.0);
}

#[test]
fn test_top_k_smaller_spectrum() {
    let t = daily_axis(100);
    let y: Vec<f64> = t.iter().map(|d| (d * 0.3).sin()).collect();
    let grid = FrequencyGrid::from_period_range(5.0, 50.0, 4).unwrap();
    let spectrum = LombScargle::new().power_spectrum(&t, &y, &grid).unwrap();
    assert_eq!(top_k(&spectrum, 8).len(), 4);
}

#[test]
fn test_entropy_constant_series() {
    let out = rolling_entropy(&vec![101.5; 120], 30, 20).unwrap();
    assert_eq!(out.len(), 120);
    assert!(out.iter().all(|v| *v == 0.0));
}

#[test]
fn test_entropy_ramp_series() {
    let ramp: Vec<f64> = (0..300).map(|i| i as f64 * 0.37 + 5.0).collect();
    let out = rolling_entropy(&ramp, 30, 20).unwrap();
    assert!(out.iter().all(|v| v.is_finite() && *v == 0.0));
}

#[test]
fn test_entropy_normalized_moments() {
    let x: Vec<f64> = daily_axis(400)
        .iter()
        .map(|d| (d * 0.05).sin() * (1.0 + d / 100.0) + (d * 0.9).cos())
        .collect();
    let out = rolling_entropy(&x, 30, 20).unwrap();
    let (mean, std) = finite_mean_std(&out).unwrap();
    assert!(mean.abs() < 1e-9);
    assert!((std - 1.0).abs() < 1e-9);
}

#[test]
fn test_normalize_properties() {
    let x = vec![3.0, -1.0, 4.0, 1.0, 5.0, -9.0, 2.0, 6.0];
    let (mean, std) = finite_mean_std(&normalize(&x)).unwrap();
    assert!(mean.abs() < 1e-12);
    assert!((std - 1.0).abs() < 1e-12);
    assert!(normalize(&[2.0; 6]).iter().all(|v| *v == 0.0));
    assert_eq!(normalize(&[0.1; 7]), vec![0.0; 7]);
    assert_eq!(normalize(&[4.2; 10]), vec![0.0; 10]);
}

#[test]
fn test_fields_at_origin() {
    let gann = gann_field(&[0.0], &[2.0, 3.0], &[10.0, 20.0], &[30.0, 90.0]).unwrap();
    assert!((gann[0] - (2.0 * 0.5 + 3.0 * 1.0)).abs() < 1e-12);

    let t = [0.0, 5.0, 10.0];
    let dewey = dewey_field(&t, &[10.0, 30.0, 90.0]).unwrap();
    let expected = [
        0.0,
        (PI).sin() + (PI / 3.0).sin() + (PI / 9.0).sin(),
        (2.0 * PI).sin() + (2.0 * PI / 3.0).sin() + (2.0 * PI / 9.0).sin(),
    ];
    for (a, b) in dewey.iter().zip(&expected) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_errors_classified() {
    let err = gann_field(&[0.0], &[1.0], &[10.0, 20.0], &[0.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = rolling_entropy(&[1.0, 2.0, 3.0], 0, 10).unwrap_err();
    assert!(matches!(err, CycleError::DegenerateComputation(_)));
}

#[test]
fn test_config_driven_scan() {
    let config: CycleConfig =
        serde_yaml::from_str("scan:\n  min_period_days: 10\n  max_period_days: 100\n  grid_size: 451\n  top_k: 3\n")
            .unwrap();
    config.validate().unwrap();

    let t = daily_axis(600);
    let y: Vec<f64> = t.iter().map(|d| (2.0 * PI * d / 45.0).cos()).collect();
    let grid = config.scan.grid().unwrap();
    let spectrum = config.scan.estimator().power_spectrum(&t, &y, &grid).unwrap();
    let peaks = top_k(&spectrum, config.scan.top_k);
    assert_eq!(peaks.len(), 3);
    assert!((peaks[0].period_days - 45.0).abs() <= 1.0);
}
