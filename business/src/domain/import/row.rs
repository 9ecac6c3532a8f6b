use std::collections::HashMap;

use crate::domain::product::expiry::ExpiryInput;

/// Column headers consumed from the spreadsheet.
pub const COLUMN_NAME: &str = "Nome";
pub const COLUMN_PRICE: &str = "Preço";
pub const COLUMN_QUANTITY: &str = "Quantidade";
pub const COLUMN_CATEGORY: &str = "Categoria";
pub const COLUMN_BRAND: &str = "Marca";
/// Optional expiry column; absent in most sheets.
pub const COLUMN_EXPIRY: &str = "Validade";

/// One spreadsheet cell, already divorced from the workbook format.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// A data row keyed by column header text. `number` is the spreadsheet
/// row number: the header row is row 1, so the first data row is row 2.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub number: usize,
    pub cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn cell(&self, header: &str) -> &CellValue {
        self.cells.get(header).unwrap_or(&CellValue::Empty)
    }
}

/// Product fields extracted from an accepted row, queued for a write.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProduct {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub brand: String,
    pub category: Option<String>,
    pub expiry: Option<ExpiryInput>,
}

/// Per-row outcome, advanced as the import run progresses.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Passed required-field validation, awaiting its write.
    Pending,
    /// Dropped before writing. Not surfaced to the user; the reason is
    /// kept for diagnostics only.
    Rejected(String),
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ImportRow {
    pub number: usize,
    pub candidate: Option<CandidateProduct>,
    pub outcome: RowOutcome,
}
