//! Report output formats.

pub mod text;

use sentiboard_core::config::OutputFormat;

use crate::report::DashboardReport;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Render a report. `bar_width` only affects text output.
pub fn render(
    report: &DashboardReport,
    format: OutputFormat,
    bar_width: usize,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(text::render_text(report, bar_width)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}
