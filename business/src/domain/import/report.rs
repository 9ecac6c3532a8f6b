use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportSummary {
    /// At least one write succeeded and none failed.
    Success,
    /// Some writes succeeded, some failed.
    Partial,
    /// Nothing was written.
    Failure,
}

/// Result of one import run: per-attempt log lines in row order plus
/// the aggregate counts.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub succeeded: usize,
    pub failed: usize,
    pub logs: Vec<String>,
    pub summary: ImportSummary,
}

impl ImportReport {
    pub fn classify(succeeded: usize, failed: usize) -> ImportSummary {
        if succeeded == 0 {
            ImportSummary::Failure
        } else if failed > 0 {
            ImportSummary::Partial
        } else {
            ImportSummary::Success
        }
    }

    /// The fixed user-facing message for the run.
    pub fn message(&self) -> String {
        match self.summary {
            ImportSummary::Failure => "Falha: Nenhum produto foi enviado.".to_string(),
            ImportSummary::Partial => format!(
                "Parcial: {} produtos enviados com sucesso, {} falhas.",
                self.succeeded, self.failed
            ),
            ImportSummary::Success => {
                "Sucesso: Todos os produtos foram enviados com sucesso!".to_string()
            }
        }
    }
}
