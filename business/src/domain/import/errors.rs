#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The file could not be read as a spreadsheet at all.
    #[error("import.unreadable_file")]
    UnreadableFile,
    /// The workbook has no sheet to read rows from.
    #[error("import.empty_workbook")]
    EmptyWorkbook,
}
