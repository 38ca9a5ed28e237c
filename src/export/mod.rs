//! Rendering of one or more training summaries
//!
//! Text keeps the fixed five-line block per workout, JSON is meant for other
//! tools, and the table format gives a compact side-by-side view.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TrainMeterError};
use crate::models::Locale;
use crate::summary::TrainingSummary;

pub mod json;
pub mod table;
pub mod text;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Json,
    Table,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Text
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = TrainMeterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "table" => Ok(ExportFormat::Table),
            _ => Err(TrainMeterError::Configuration(format!(
                "Unsupported format: {}",
                s
            ))),
        }
    }
}

/// Render summaries in the requested format.
///
/// Summaries with NaN or infinite metrics are refused.
pub fn render_summaries(
    summaries: &[TrainingSummary],
    format: ExportFormat,
    locale: Locale,
) -> Result<String> {
    for summary in summaries {
        summary.ensure_finite()?;
    }

    match format {
        ExportFormat::Text => Ok(text::render_text(summaries, locale)),
        ExportFormat::Json => json::render_json(summaries),
        ExportFormat::Table => Ok(table::render_table(summaries, locale)),
    }
}

/// Render summaries and write them to a file
pub fn export_summaries<P: AsRef<Path>>(
    summaries: &[TrainingSummary],
    format: ExportFormat,
    locale: Locale,
    output_path: P,
) -> Result<()> {
    let rendered = render_summaries(summaries, format, locale)?;
    std::fs::write(&output_path, rendered)?;

    tracing::info!(
        path = %output_path.as_ref().display(),
        ?format,
        count = summaries.len(),
        "Summaries exported"
    );
    Ok(())
}
