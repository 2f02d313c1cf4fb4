//! Export date parsing

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fmt;

/// Naive date-time layouts, read as UTC
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Date-time layouts carrying an explicit offset
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// A date as it appears in an export: text, or epoch milliseconds in
/// older Ghost versions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExportDate {
    Millis(i64),
    Text(String),
}

impl fmt::Display for ExportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportDate::Millis(ms) => write!(f, "{}", ms),
            ExportDate::Text(text) => f.write_str(text),
        }
    }
}

/// Parse an export date into a date-time with offset.
///
/// Dates without an offset are taken as UTC; a bare date is midnight UTC.
pub fn parse_export_date(value: &ExportDate) -> Option<DateTime<FixedOffset>> {
    match value {
        ExportDate::Millis(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.fixed_offset()),
        ExportDate::Text(text) => parse_date_text(text.trim()),
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<FixedOffset>> {
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
