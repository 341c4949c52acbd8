//! Helper functions and utilities
//!
//! Lenient parsing of the date and time strings the backend hands us, plus
//! small formatting helpers for list rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar date (`YYYY-MM-DD`).
///
/// A full timestamp is accepted too; only its date part is kept.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| value.get(..10).and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok()))
}

/// Parse a time of day (`HH:MM` or `HH:MM:SS[.fff]`)
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

/// Parse an absolute instant.
///
/// Accepts naive ISO datetimes, RFC 3339 (kept in its own wall-clock offset)
/// and bare dates, which map to midnight.
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// The instant malformed values degrade to (1970-01-01T00:00:00)
pub fn epoch() -> NaiveDateTime {
    NaiveDateTime::default()
}

/// Format a time of day for display, e.g. `"14:30"` -> `"2:30 PM"`.
///
/// Missing values render as `TBD`; unparsable values are shown verbatim.
pub fn format_time(value: Option<&str>) -> String {
    match value {
        None => "TBD".to_string(),
        Some(raw) if raw.trim().is_empty() => "TBD".to_string(),
        Some(raw) => match parse_time(raw) {
            Some(time) => time.format("%-I:%M %p").to_string(),
            None => raw.to_string(),
        },
    }
}

/// Format a calendar date for display, e.g. `"2025-03-01"` -> `"Mar 1, 2025"`
pub fn format_date(value: Option<&str>) -> String {
    match value.and_then(parse_date) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => value.unwrap_or("TBD").to_string(),
    }
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-01"), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(parse_date("2025-03-01T10:00:00"), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(parse_date("03/01/2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("17:00:45"), NaiveTime::from_hms_opt(17, 0, 45));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn test_parse_instant() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 5)
            .and_then(|d| d.and_hms_opt(8, 15, 0));
        assert_eq!(parse_instant("2025-01-05T08:15:00"), expected);
        assert_eq!(parse_instant("2025-01-05T08:15"), expected);
        assert_eq!(parse_instant("2025-01-05 08:15:00"), expected);
        assert_eq!(parse_instant("2025-01-05T08:15:00+05:30"), expected);
        assert_eq!(
            parse_instant("2025-01-05"),
            NaiveDate::from_ymd_opt(2025, 1, 5).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert_eq!(parse_instant("soon"), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some("14:30")), "2:30 PM");
        assert_eq!(format_time(Some("09:05")), "9:05 AM");
        assert_eq!(format_time(None), "TBD");
        assert_eq!(format_time(Some("later")), "later");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-03-01")), "Mar 1, 2025");
        assert_eq!(format_date(None), "TBD");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }
}
