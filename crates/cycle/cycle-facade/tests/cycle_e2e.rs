//! End-to-end scenarios: resonance pipeline, forecast and wheel from one document

use cycle_facade::{build_wheel, harmonic_forecast, CycleConfig, ResonanceBand};

const CONFIG: &str = r#"
forecast:
  cycles_days: [21, 63, 252]
  kozyrev_phase_rate: 0.001
  horizon_days: 60
gann:
  amplitudes: [1.0, 0.6, 0.3]
  periods_days: [90, 180, 360]
  phases_deg: [0, 30, 60]
kozyrev:
  alpha: 0.0004
  beta: 0.021
dewey:
  cycles_days: [18.6, 41, 54, 144]
coherence:
  entropy_window: 30
  entropy_bins: 20
  lambda: 0.5
resonance:
  time_horizon_days: 400
  threshold_pos: 1.0
  threshold_neg: -1.0
wheel:
  gann_angles_deg: [0, 90, 180, 270]
"#;

fn synthetic_prices(days: usize) -> (Vec<f64>, Vec<f64>) {
    // Weekday-only sampling
    let t: Vec<f64> = (0..days).filter(|d| d % 7 < 5).map(|d| d as f64).collect();
    let y = t
        .iter()
        .map(|d| 5.0 * (d / 40.0).sin() + 2.0 * (d / 9.0).cos() + (d * 1.7).sin() * 0.5)
        .collect();
    (t, y)
}

#[test]
fn test_resonance_pipeline() {
    let config: CycleConfig = serde_yaml::from_str(CONFIG).unwrap();
    config.validate().unwrap();

    let (t, y) = synthetic_prices(900);
    let report = config.resonance_engine().unwrap().run(&t, &y).unwrap();

    assert_eq!(report.offset, t.len() - 400);
    assert_eq!(report.components.len(), 400);
    assert_eq!(report.bands.len(), 400);
    assert!(report.components.index.iter().all(|v| v.is_finite()));
    assert!(report.components.coherence.iter().all(|c| *c > 0.0));

    let mean: f64 = report.components.index.iter().sum::<f64>() / 400.0;
    assert!(mean.abs() < 1e-9);

    // A unit-variance series always has samples beyond one deviation
    assert!(report
        .bands
        .iter()
        .any(|b| matches!(b, ResonanceBand::Above | ResonanceBand::Below)));
}

#[test]
fn test_forecast_scenario() {
    let config: CycleConfig = serde_yaml::from_str(CONFIG).unwrap();
    let (t, y) = synthetic_prices(300);
    let forecast = harmonic_forecast(&t, &y, config.forecast_params().unwrap()).unwrap();

    let last = *t.last().unwrap() as usize;
    assert_eq!(forecast.days.len(), last + 61);
    assert_eq!(forecast.forecast_start, last + 1);
    assert_eq!(forecast.observed.len(), t.len());
}

#[test]
fn test_wheel_scenario() {
    let config: CycleConfig = serde_yaml::from_str(CONFIG).unwrap();
    let wheel = build_wheel(&config.wheel_params().unwrap()).unwrap();
    assert_eq!(wheel.rings.len(), 4);
    assert_eq!(wheel.spokes.len(), 4);
    // Longest cycle innermost
    let innermost = wheel
        .rings
        .iter()
        .min_by(|a, b| a.radius.total_cmp(&b.radius))
        .unwrap();
    assert_eq!(innermost.period_days, 144.0);
}

#[test]
fn test_missing_section_reported() {
    let config: CycleConfig = serde_yaml::from_str("gann:\n  amplitudes: [1]\n  periods_days: [30]\n  phases_deg: [0]\n").unwrap();
    let err = config.resonance_engine().unwrap_err();
    assert!(err.to_string().contains("'kozyrev'"));
}
