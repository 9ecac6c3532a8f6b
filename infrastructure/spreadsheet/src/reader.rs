use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use business::domain::import::errors::ImportError;
use business::domain::import::row::{CellValue, RawRow};
use business::domain::import::row_source::RowSource;

/// Reads the first worksheet of an XLSX file. The first row is taken
/// as the header row; each following row becomes a [`RawRow`] keyed by
/// those headers, numbered the way the sheet displays them (headers
/// are row 1, data starts at row 2).
pub struct XlsxRowSource;

impl XlsxRowSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for XlsxRowSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSource for XlsxRowSource {
    fn read(&self, file: &[u8]) -> Result<Vec<RawRow>, ImportError> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(file)).map_err(|_| ImportError::UnreadableFile)?;

        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(ImportError::EmptyWorkbook)?;
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|_| ImportError::UnreadableFile)?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(header_text).collect(),
            None => return Ok(Vec::new()),
        };

        let mut parsed = Vec::new();
        for (index, row) in rows.enumerate() {
            let mut cells = HashMap::new();
            for (header, data) in headers.iter().zip(row.iter()) {
                if header.is_empty() {
                    continue;
                }
                let value = convert(data);
                if !matches!(value, CellValue::Empty) {
                    cells.insert(header.clone(), value);
                }
            }
            if cells.is_empty() {
                continue;
            }
            parsed.push(RawRow {
                number: index + 2,
                cells,
            });
        }

        Ok(parsed)
    }
}

fn header_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        _ => String::new(),
    }
}

fn convert(data: &Data) -> CellValue {
    match data {
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Empty | Data::Error(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_bytes_that_are_not_a_workbook() {
        let source = XlsxRowSource::new();

        let result = source.read(b"not a spreadsheet");

        assert!(matches!(result, Err(ImportError::UnreadableFile)));
    }

    #[test]
    fn should_convert_numeric_cells() {
        assert!(matches!(convert(&Data::Float(12.5)), CellValue::Number(n) if n == 12.5));
        assert!(matches!(convert(&Data::Int(3)), CellValue::Number(n) if n == 3.0));
    }

    #[test]
    fn should_treat_blank_text_as_empty() {
        assert!(matches!(convert(&Data::String("   ".into())), CellValue::Empty));
        assert!(matches!(convert(&Data::Empty), CellValue::Empty));
    }

    #[test]
    fn should_keep_text_cells_verbatim() {
        let value = convert(&Data::String("12/2025".into()));

        assert!(matches!(value, CellValue::Text(s) if s == "12/2025"));
    }
}
