use super::errors::ImportError;
use super::row::RawRow;

/// Port for extracting rows from an uploaded spreadsheet file. The
/// workbook format is a library concern; the domain only sees rows
/// keyed by header text.
pub trait RowSource: Send + Sync {
    fn read(&self, file: &[u8]) -> Result<Vec<RawRow>, ImportError>;
}
