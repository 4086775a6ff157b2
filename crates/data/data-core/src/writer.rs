//! Artifact writers.

use data_spi::{Result, SeriesError};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

fn io_error(path: &Path, e: impl std::fmt::Display) -> SeriesError {
    SeriesError::Io(format!("{}: {}", path.display(), e))
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| io_error(dir, e))
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Pretty-printed JSON document.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| SeriesError::Serialize(e.to_string()))?;
    out.write_all(b"\n").map_err(|e| io_error(path, e))?;
    out.flush().map_err(|e| io_error(path, e))?;
    tracing::debug!(path = %path.display(), "json written");
    Ok(())
}

/// CSV table with a header row derived from the row type's fields.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path).map_err(|e| io_error(path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| SeriesError::Serialize(e.to_string()))?;
    }
    writer.flush().map_err(|e| io_error(path, e))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "csv written");
    Ok(())
}
