//! Render error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Nothing to plot
    #[error("No data for {0} chart")]
    EmptyData(String),

    /// Backend or layout failure
    #[error("Failed to draw {chart} chart: {reason}")]
    Draw { chart: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    pub(crate) fn draw(chart: &str, err: impl std::fmt::Display) -> Self {
        Self::Draw {
            chart: chart.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RenderError::EmptyData("wheel".to_string()).to_string(),
            "No data for wheel chart"
        );
        assert_eq!(
            RenderError::draw("scan", "permission denied").to_string(),
            "Failed to draw scan chart: permission denied"
        );
    }
}
