use crate::domain::product::expiry::ExpiryInput;

use super::row::{
    CandidateProduct, CellValue, ImportRow, RawRow, RowOutcome, COLUMN_BRAND, COLUMN_CATEGORY,
    COLUMN_EXPIRY, COLUMN_NAME, COLUMN_PRICE, COLUMN_QUANTITY,
};

fn numeric(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) => Some(*n),
        // Spreadsheets frequently hold numbers as text.
        CellValue::Text(s) => s.trim().replace(',', ".").parse().ok(),
        CellValue::Empty => None,
    }
}

fn expiry_input(cell: &CellValue) -> Option<ExpiryInput> {
    match cell {
        CellValue::Number(n) => Some(ExpiryInput::Serial(*n)),
        CellValue::Text(s) if !s.trim().is_empty() => Some(ExpiryInput::Text(s.clone())),
        _ => None,
    }
}

fn candidate_from(row: &RawRow) -> Result<CandidateProduct, String> {
    let name = row
        .cell(COLUMN_NAME)
        .as_text()
        .ok_or_else(|| format!("campo obrigatório ausente: {COLUMN_NAME}"))?
        .to_string();

    let price = numeric(row.cell(COLUMN_PRICE))
        .ok_or_else(|| format!("campo obrigatório ausente: {COLUMN_PRICE}"))?;

    let quantity = numeric(row.cell(COLUMN_QUANTITY))
        .ok_or_else(|| format!("campo obrigatório ausente: {COLUMN_QUANTITY}"))?;
    if quantity < 0.0 {
        return Err(format!("valor inválido: {COLUMN_QUANTITY}"));
    }

    let brand = row
        .cell(COLUMN_BRAND)
        .as_text()
        .ok_or_else(|| format!("campo obrigatório ausente: {COLUMN_BRAND}"))?
        .to_string();

    let category = row.cell(COLUMN_CATEGORY).as_text().map(str::to_string);

    Ok(CandidateProduct {
        name,
        price,
        quantity: quantity as u32,
        brand,
        category,
        // A malformed expiry is never a rejection reason; it just ends
        // up "not informed".
        expiry: expiry_input(row.cell(COLUMN_EXPIRY)),
    })
}

/// Splits extracted rows into write candidates and silently dropped
/// rows, in original row order. Rejected rows keep their reason for
/// diagnostics but are excluded from the candidate count.
pub fn reconcile(rows: &[RawRow]) -> Vec<ImportRow> {
    rows.iter()
        .map(|row| match candidate_from(row) {
            Ok(candidate) => ImportRow {
                number: row.number,
                candidate: Some(candidate),
                outcome: RowOutcome::Pending,
            },
            Err(reason) => ImportRow {
                number: row.number,
                candidate: None,
                outcome: RowOutcome::Rejected(reason),
            },
        })
        .collect()
}
