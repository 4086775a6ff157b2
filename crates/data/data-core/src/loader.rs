//! CSV series loader.

use crate::detrend::detrend;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use data_api::SeriesConfig;
use data_spi::{LoadedSeries, Result, SeriesError, SeriesSource};
use std::fs::File;
use std::io::{BufReader, Read};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

fn parse_with(field: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(field, format).ok().or_else(|| {
        NaiveDate::parse_from_str(field, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

/// Parse a date cell with an explicit format, or by trying common formats
/// and then RFC 3339.
pub fn parse_date(field: &str, format: Option<&str>) -> Option<NaiveDateTime> {
    match format {
        Some(format) => parse_with(field, format),
        None => DATETIME_FORMATS
            .iter()
            .chain(DATE_FORMATS)
            .find_map(|format| parse_with(field, format))
            .or_else(|| {
                DateTime::parse_from_rfc3339(field)
                    .ok()
                    .map(|d| d.naive_utc())
            }),
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| SeriesError::MissingColumn(name.to_string()))
}

/// Loads a dated price column from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvSeriesLoader {
    config: SeriesConfig,
}

impl CsvSeriesLoader {
    pub fn new(config: SeriesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Parse, sort and detrend a CSV document.
    pub fn load_from_reader<R: Read>(&self, input: R) -> Result<LoadedSeries> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| SeriesError::Csv(e.to_string()))?
            .clone();
        let date_idx = column_index(&headers, &self.config.date_col)?;
        let price_idx = column_index(&headers, &self.config.price_col)?;
        let format = self.config.date_format.as_deref();

        let mut rows: Vec<(NaiveDateTime, f64)> = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(|e| SeriesError::Csv(e.to_string()))?;
            let row = record
                .position()
                .map(|p| p.line())
                .unwrap_or(i as u64 + 2);

            let date_field = record.get(date_idx).unwrap_or("");
            let date = parse_date(date_field, format)
                .ok_or_else(|| SeriesError::parse(row, format!("invalid date '{}'", date_field)))?;

            let price_field = record.get(price_idx).unwrap_or("");
            let price = price_field
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .ok_or_else(|| {
                    SeriesError::parse(row, format!("invalid price '{}'", price_field))
                })?;

            rows.push((date, price));
        }

        let first = match rows.iter().map(|(date, _)| *date).min() {
            Some(first) => first,
            None => return Err(SeriesError::Empty),
        };
        rows.sort_by_key(|(date, _)| *date);

        let dates: Vec<NaiveDateTime> = rows.iter().map(|(date, _)| *date).collect();
        let t: Vec<f64> = dates
            .iter()
            .map(|date| (*date - first).num_days() as f64)
            .collect();
        let raw: Vec<f64> = rows.iter().map(|(_, price)| *price).collect();
        let detrended = detrend(&t, &raw);

        tracing::debug!(
            rows = raw.len(),
            span_days = t.last().copied().unwrap_or(0.0),
            "series loaded"
        );

        Ok(LoadedSeries {
            dates,
            t,
            raw,
            detrended,
        })
    }
}

impl SeriesSource for CsvSeriesLoader {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<LoadedSeries> {
        self.config.validate()?;
        let path = &self.config.csv_path;
        let file = File::open(path)
            .map_err(|e| SeriesError::Io(format!("{}: {}", path.display(), e)))?;
        self.load_from_reader(BufReader::new(file))
    }
}

/// Load the series described by `config`.
pub fn load_series(config: &SeriesConfig) -> Result<LoadedSeries> {
    CsvSeriesLoader::new(config.clone()).load()
}
