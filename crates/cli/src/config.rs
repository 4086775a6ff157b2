//! Configuration document: input, output directory and analysis sections.

use anyhow::{Context, Result};
use cycle_facade::CycleConfig;
use data_facade::SeriesConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn default_output_dir() -> PathBuf {
    PathBuf::from("charts")
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Required by every command that reads the series
    #[serde(default)]
    pub input: Option<SeriesConfig>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(flatten)]
    pub cycle: CycleConfig,
}

impl AppConfig {
    /// Read and validate a YAML document, or TOML when the file ends in `.toml`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text, path)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(text)
                .with_context(|| format!("invalid TOML in {}", path.display()))?,
            _ => serde_yaml::from_str(text)
                .with_context(|| format!("invalid YAML in {}", path.display()))?,
        };
        if let Some(input) = &config.input {
            input.validate()?;
        }
        config.cycle.validate()?;
        Ok(config)
    }

    pub fn input(&self) -> Result<&SeriesConfig> {
        self.input
            .as_ref()
            .context("missing configuration key 'input'")
    }

    pub fn output_path(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
input:
  csv_path: data/spx.csv
  date_col: Date
output_dir: out
scan:
  top_k: 4
forecast:
  cycles_days: [30, 90]
"#;

    const TOML: &str = r#"
output_dir = "out"

[input]
csv_path = "data/spx.csv"
price_col = "Adj Close"

[scan]
grid_size = 500

[dewey]
cycles_days = [41.0, 54.0]
"#;

    #[test]
    fn test_parse_yaml() {
        let config = AppConfig::parse(YAML, Path::new("config.yaml")).unwrap();
        let input = config.input().unwrap();
        assert_eq!(input.date_col, "Date");
        assert_eq!(input.price_col, "close");
        assert_eq!(config.output_path("a.json"), PathBuf::from("out/a.json"));
        assert_eq!(config.cycle.scan.top_k, 4);
        assert_eq!(config.cycle.forecast_params().unwrap().horizon_days, 300);
    }

    #[test]
    fn test_parse_toml() {
        let config = AppConfig::parse(TOML, Path::new("settings.toml")).unwrap();
        assert_eq!(config.input().unwrap().price_col, "Adj Close");
        assert_eq!(config.cycle.scan.grid_size, 500);
        assert_eq!(config.cycle.wheel_params().unwrap().cycles_days, vec![41.0, 54.0]);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::parse("{}", Path::new("config.yaml")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("charts"));
        let err = config.input().unwrap_err();
        assert_eq!(err.to_string(), "missing configuration key 'input'");
    }

    #[test]
    fn test_invalid_section_rejected() {
        let text = "scan:\n  min_period_days: 900\n";
        assert!(AppConfig::parse(text, Path::new("config.yaml")).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
