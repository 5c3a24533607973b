pub mod json;
pub mod md;

use crate::error::RepogradeError;
use crate::types::report::AnalysisReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, RepogradeError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RepogradeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
