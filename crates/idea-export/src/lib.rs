//! # idea-export
//!
//! Renders an ordered idea list into an `.xlsx` workbook.
//!
//! The workbook has one worksheet, `Ideas`, with the columns
//! `ID | Idea | Status | Submitted Date`, one row per idea in input order.
//! Rendering is a pure transform: delivering the bytes as an attachment is
//! the caller's job.

pub mod error;

use chrono::{DateTime, NaiveDate, Utc};
use idea_core::entities::Idea;
use rust_xlsxwriter::{Format, Workbook};

pub use error::ExportError;

/// MIME type of an `.xlsx` workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const SHEET_NAME: &str = "Ideas";

pub const HEADERS: [&str; 4] = ["ID", "Idea", "Status", "Submitted Date"];

/// en-US `toLocaleString` layout, e.g. `10/16/2026, 3:04:05 PM`.
const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Longest string an xlsx cell can hold, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Column widths in characters.
const COLUMN_WIDTHS: [f64; 4] = [8.0, 60.0, 18.0, 24.0];

/// One spreadsheet row, as it will appear in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub id: i64,
    pub idea: String,
    pub status: String,
    pub submitted_date: String,
}

impl From<&Idea> for ExportRow {
    fn from(idea: &Idea) -> Self {
        Self {
            id: idea.id,
            idea: idea.text.clone(),
            status: idea.status.to_string(),
            submitted_date: format_submitted(&idea.submitted_at),
        }
    }
}

/// A rendered workbook ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Project ideas into spreadsheet rows, preserving order.
#[must_use]
pub fn export_rows(ideas: &[Idea]) -> Vec<ExportRow> {
    ideas.iter().map(ExportRow::from).collect()
}

/// Render `ideas` into an `.xlsx` workbook named for today's date.
///
/// # Errors
///
/// Returns `ExportError` if the encoder fails.
pub fn render(ideas: &[Idea]) -> Result<ExportFile, ExportError> {
    render_on(ideas, Utc::now().date_naive())
}

/// Render with an explicit export date (used in the filename).
///
/// # Errors
///
/// Returns `ExportError` if the encoder fails.
pub fn render_on(ideas: &[Idea], date: NaiveDate) -> Result<ExportFile, ExportError> {
    Ok(ExportFile {
        filename: export_filename(date),
        content_type: XLSX_CONTENT_TYPE,
        bytes: encode_workbook(&export_rows(ideas))?,
    })
}

/// `ideas_export_YYYY-MM-DD.xlsx`
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("ideas_export_{}.xlsx", date.format("%Y-%m-%d"))
}

#[must_use]
pub fn format_submitted(dt: &DateTime<Utc>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Clip `text` to what a single cell can hold. Longer ideas are cut, not
/// dropped, so every idea still gets its row.
fn cell_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[allow(clippy::cast_precision_loss)]
fn encode_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, (title, width)) in (0u16..).zip(HEADERS.iter().zip(COLUMN_WIDTHS)) {
        sheet.write_string_with_format(0, col, *title, &header)?;
        sheet.set_column_width(col, width)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let r = u32::try_from(index + 1).map_err(|_| ExportError::TooManyRows(rows.len()))?;
        sheet.write_number(r, 0, row.id as f64)?;
        sheet.write_string(r, 1, cell_text(&row.idea))?;
        sheet.write_string(r, 2, &row.status)?;
        sheet.write_string(r, 3, &row.submitted_date)?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use idea_core::enums::IdeaStatus;
    use pretty_assertions::assert_eq;

    use super::*;

    fn idea(id: i64, text: &str, status: IdeaStatus, hour: u32) -> Idea {
        Idea {
            id,
            text: text.into(),
            status,
            submitted_at: Utc.with_ymd_and_hms(2026, 10, 16, hour, 4, 5).unwrap(),
        }
    }

    #[test]
    fn filename_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(export_filename(date), "ideas_export_2026-01-05.xlsx");
    }

    #[test]
    fn dates_use_us_locale_layout() {
        let afternoon = Utc.with_ymd_and_hms(2026, 10, 16, 15, 4, 5).unwrap();
        assert_eq!(format_submitted(&afternoon), "10/16/2026, 3:04:05 PM");

        let midnight = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 9).unwrap();
        assert_eq!(format_submitted(&midnight), "3/1/2026, 12:00:09 AM");
    }

    #[test]
    fn rows_follow_input_order_and_fields() {
        let ideas = vec![
            idea(2, "Newer", IdeaStatus::Implemented, 15),
            idea(1, "Older", IdeaStatus::NotImplemented, 9),
        ];

        let rows = export_rows(&ideas);
        assert_eq!(
            rows,
            vec![
                ExportRow {
                    id: 2,
                    idea: "Newer".into(),
                    status: "Implemented".into(),
                    submitted_date: "10/16/2026, 3:04:05 PM".into(),
                },
                ExportRow {
                    id: 1,
                    idea: "Older".into(),
                    status: "Not Implemented".into(),
                    submitted_date: "10/16/2026, 9:04:05 AM".into(),
                },
            ]
        );
    }

    #[test]
    fn render_produces_xlsx_zip() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let file = render_on(&[idea(1, "Add dark mode", IdeaStatus::Rejected, 12)], date).unwrap();

        assert_eq!(file.filename, "ideas_export_2026-10-16.xlsx");
        assert_eq!(file.content_type, XLSX_CONTENT_TYPE);
        assert!(file.bytes.starts_with(b"PK"), "xlsx is a zip container");
    }

    #[test]
    fn oversized_idea_is_clipped_not_rejected() {
        let long = "x".repeat(40_000);
        let ideas = vec![
            idea(2, &long, IdeaStatus::NotImplemented, 10),
            idea(1, "short", IdeaStatus::Implemented, 9),
        ];

        let file = render(&ideas).unwrap();
        assert!(file.bytes.starts_with(b"PK"));

        let rows = export_rows(&ideas);
        assert_eq!(rows.len(), ideas.len());
        assert_eq!(rows[0].idea.len(), 40_000, "rows keep the full text");
    }

    #[test]
    fn cell_text_respects_char_limit() {
        let ascii = "a".repeat(MAX_CELL_CHARS + 10);
        assert_eq!(cell_text(&ascii).chars().count(), MAX_CELL_CHARS);

        let wide = "é".repeat(MAX_CELL_CHARS + 1);
        let clipped = cell_text(&wide);
        assert_eq!(clipped.chars().count(), MAX_CELL_CHARS);
        assert!(wide.starts_with(clipped));

        let exact = "b".repeat(MAX_CELL_CHARS);
        assert_eq!(cell_text(&exact), exact.as_str());
        assert_eq!(cell_text("short"), "short");
    }

    #[test]
    fn empty_export_still_renders() {
        let file = render(&[]).unwrap();
        assert!(file.bytes.starts_with(b"PK"));
        assert!(export_rows(&[]).is_empty());
    }
}
