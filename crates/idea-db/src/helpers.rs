//! Row-to-entity parsing helpers.
//!
//! Rows written by the service store `timestamp` as `YYYY-MM-DD HH:MM:SS.mmm`;
//! rows from older deployments carry SQLite's `CURRENT_TIMESTAMP` format
//! without the fraction. Both sort correctly as text.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DatabaseError;

/// Storage format for the `timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format a timestamp for the `timestamp` column.
#[must_use]
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a TEXT column as `DateTime<Utc>`.
///
/// Handles RFC 3339 (`"2026-02-09T14:30:00+00:00"`), the storage format
/// (`"2026-02-09 14:30:00.125"`) and `SQLite`'s default (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches none of the formats.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DatabaseError::Query(format!("Failed to parse datetime '{s}'")))
}
