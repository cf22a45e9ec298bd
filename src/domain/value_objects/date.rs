//! Content Dates
//!
//! Date metafields are free text in the store. Editors use full timestamps,
//! calendar dates, or just a month or year.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a date metafield into a UTC instant
///
/// Accepts RFC 3339, `YYYY-MM-DD`, `YYYY-MM` and `YYYY`. Partial dates
/// resolve to the first day of the period at midnight UTC.
pub fn parse_content_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d"))
        .ok()?;

    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// Short month and year, e.g. `Jan 2022`
///
/// Unparsable input is returned unchanged.
pub fn month_year_label(raw: &str) -> String {
    match parse_content_date(raw) {
        Some(date) => date.format("%b %Y").to_string(),
        None => raw.trim().to_string(),
    }
}
