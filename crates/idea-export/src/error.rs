use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The workbook encoder rejected a write or failed to serialize.
    #[error("spreadsheet encoding failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// More rows than a worksheet can hold.
    #[error("too many ideas to export: {0}")]
    TooManyRows(usize),
}
