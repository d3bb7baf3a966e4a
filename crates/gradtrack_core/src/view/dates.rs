//! Flexible date parsing and day-delta helpers for string-typed cells.
//!
//! # Invariants
//! - Parsing tries an ISO-8601 timestamp first, then a plain `yyyy-mm-dd`
//!   date; anything else is an absent value.
//! - Day deltas are calendar-day differences and may be negative.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Parses a date cell into a calendar date.
///
/// Accepts an RFC3339/ISO-8601 timestamp or a plain `yyyy-mm-dd` date.
/// Empty or unparseable input yields `None`.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Parses a date cell into a UTC instant, for typed deadline fields.
///
/// Plain dates map to midnight UTC.
pub fn parse_flexible_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar-day distance from `today` to the date in `value`.
///
/// Negative when the date is past; `None` when `value` does not parse.
pub fn days_until(value: &str, today: NaiveDate) -> Option<i64> {
    parse_flexible_date(value).map(|date| (date - today).num_days())
}

/// Today's date in the local timezone, the reference point for dashboards.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
