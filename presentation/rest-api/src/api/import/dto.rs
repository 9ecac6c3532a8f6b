use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::import::report::{ImportReport, ImportSummary};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ImportSummaryDto {
    #[oai(rename = "success")]
    Success,
    #[oai(rename = "partial")]
    Partial,
    #[oai(rename = "failure")]
    Failure,
}

impl From<ImportSummary> for ImportSummaryDto {
    fn from(summary: ImportSummary) -> Self {
        match summary {
            ImportSummary::Success => ImportSummaryDto::Success,
            ImportSummary::Partial => ImportSummaryDto::Partial,
            ImportSummary::Failure => ImportSummaryDto::Failure,
        }
    }
}

/// Spreadsheet upload, encoded so it travels inside a JSON body.
#[derive(Debug, Clone, Object)]
pub struct ImportRequest {
    /// Base64-encoded XLSX file
    pub file_base64: String,
}

/// Outcome of one import run.
#[derive(Debug, Clone, Object)]
pub struct ImportReportResponse {
    /// Aggregate verdict for the run
    pub summary: ImportSummaryDto,
    /// User-facing message matching the verdict
    pub message: String,
    /// Products written
    pub succeeded: u64,
    /// Write attempts that failed
    pub failed: u64,
    /// Per-attempt log lines in row order
    pub logs: Vec<String>,
}

impl From<ImportReport> for ImportReportResponse {
    fn from(report: ImportReport) -> Self {
        let message = report.message();
        Self {
            summary: report.summary.into(),
            message,
            succeeded: report.succeeded as u64,
            failed: report.failed as u64,
            logs: report.logs,
        }
    }
}
