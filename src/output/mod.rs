//! Output module for rendering analysis reports
//!
//! This module handles:
//! - Rendering a report as plain text, markdown or JSON
//! - Rendering a failed analysis for the user

mod markdown;
mod text;

pub use markdown::format_markdown_report;
pub use text::format_text_report;

use crate::analyzer::AnalysisResult;
use crate::LensError;
use clap::ValueEnum;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Report formats supported by the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Renders an analysis result in the requested format
pub fn render(result: &AnalysisResult, format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Text => Ok(format_text_report(result)),
        OutputFormat::Markdown => Ok(format_markdown_report(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Renders a failed analysis
///
/// The remote status is shown only when the target server produced the failure.
pub fn format_error(error: &LensError) -> String {
    let message = match error {
        LensError::Fetch(e) => e.message(),
        other => other.to_string(),
    };

    match error.remote_status() {
        Some(status) => format!("Error: {}\nRemote status: {}\n", message, status),
        None => format!("Error: {}\n", message),
    }
}
