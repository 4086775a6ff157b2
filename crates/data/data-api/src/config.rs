//! Input section of the configuration document.

use data_spi::{Result, SeriesError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_date_col() -> String {
    "date".to_string()
}

fn default_price_col() -> String {
    "close".to_string()
}

/// Where the series lives and how to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// CSV file path
    pub csv_path: PathBuf,
    /// Date column name
    #[serde(default = "default_date_col")]
    pub date_col: String,
    /// Price column name
    #[serde(default = "default_price_col")]
    pub price_col: String,
    /// chrono format string; common formats are tried when unset
    #[serde(default)]
    pub date_format: Option<String>,
}

impl SeriesConfig {
    /// Create a configuration with the default column names.
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            date_col: default_date_col(),
            price_col: default_price_col(),
            date_format: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.csv_path.as_os_str().is_empty() {
            return Err(SeriesError::Io("input.csv_path is empty".to_string()));
        }
        if self.date_col.trim().is_empty() {
            return Err(SeriesError::MissingColumn("input.date_col".to_string()));
        }
        if self.price_col.trim().is_empty() {
            return Err(SeriesError::MissingColumn("input.price_col".to_string()));
        }
        Ok(())
    }
}

/// Builder for SeriesConfig.
#[derive(Debug, Default)]
pub struct SeriesConfigBuilder {
    csv_path: Option<PathBuf>,
    date_col: Option<String>,
    price_col: Option<String>,
    date_format: Option<String>,
}

impl SeriesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn date_col(mut self, name: &str) -> Self {
        self.date_col = Some(name.to_string());
        self
    }

    pub fn price_col(mut self, name: &str) -> Self {
        self.price_col = Some(name.to_string());
        self
    }

    pub fn date_format(mut self, format: &str) -> Self {
        self.date_format = Some(format.to_string());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> std::result::Result<SeriesConfig, &'static str> {
        Ok(SeriesConfig {
            csv_path: self.csv_path.ok_or("csv_path is required")?,
            date_col: self.date_col.unwrap_or_else(default_date_col),
            price_col: self.price_col.unwrap_or_else(default_price_col),
            date_format: self.date_format,
        })
    }
}
