//! Dated price series after sorting and detrending.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One input series, ascending by date.
///
/// All four vectors have the same length. `t` holds whole days since the
/// first row; `detrended` is `raw` minus its least-squares line over `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedSeries {
    pub dates: Vec<NaiveDateTime>,
    pub t: Vec<f64>,
    pub raw: Vec<f64>,
    pub detrended: Vec<f64>,
}

impl LoadedSeries {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Day offset of the last sample.
    pub fn last_day(&self) -> Option<f64> {
        self.t.last().copied()
    }

    /// `YYYY-MM-DD`, with the time appended only when it is not midnight.
    pub fn format_date(date: &NaiveDateTime) -> String {
        if date.time() == NaiveTime::MIN {
            date.format("%Y-%m-%d").to_string()
        } else {
            date.format("%Y-%m-%d %H:%M:%S").to_string()
        }
    }
}
