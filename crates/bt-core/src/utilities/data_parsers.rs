//! Data parsing helpers.
//!
//! Parses the textual dates and timestamps that reach the engine from
//! outside: holiday document dates and caller-supplied range bounds.

use chrono::{NaiveDate, NaiveDateTime};

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a holiday document date.
///
/// Accepts `YYYY-MM-DD` as well as the compact `YYYYMMDD` form used by the
/// data.gov.au public holiday dataset.
pub fn parse_holiday_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    parse_iso_date(s).or_else(|| {
        if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            NaiveDate::parse_from_str(s, "%Y%m%d").ok()
        } else {
            None
        }
    })
}

/// Parse a local timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, the same with a `T` separator, and a
/// bare `YYYY-MM-DD` (taken as midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| parse_iso_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)))
}
