//! ISO date parsing and display formatting.
//!
//! The API sends due dates either as bare `YYYY-MM-DD` strings or as full
//! RFC 3339 timestamps at midnight UTC. Both are accepted; only the calendar
//! date is kept.

use chrono::{DateTime, NaiveDate};

use crate::errors::CoreError;

/// Default display pattern, e.g. `Mar 05, 2025`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

/// Parse an ISO date or timestamp into a calendar date.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Strict variant of [`parse_iso_date`] for user input.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] when `raw` is neither a date nor an
/// RFC 3339 timestamp.
pub fn require_iso_date(raw: &str) -> Result<NaiveDate, CoreError> {
    parse_iso_date(raw).ok_or_else(|| CoreError::InvalidDate(raw.to_string()))
}

/// Format an ISO date string with a chrono `pattern`.
///
/// Unparseable input is returned unchanged so a bad date never hides a card.
#[must_use]
pub fn format_iso_date(raw: &str, pattern: &str) -> String {
    parse_iso_date(raw).map_or_else(
        || raw.to_string(),
        |date| date.format(pattern).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_date() {
        assert_eq!(
            parse_iso_date("2025-03-05"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn parses_timestamp_and_keeps_date() {
        assert_eq!(
            parse_iso_date("2025-03-05T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso_date("next tuesday").is_none());
        assert!(require_iso_date("2025-13-01").is_err());
    }

    #[test]
    fn formats_with_default_pattern() {
        assert_eq!(format_iso_date("2025-03-05", DEFAULT_DATE_FORMAT), "Mar 05, 2025");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_iso_date("soon", DEFAULT_DATE_FORMAT), "soon");
    }
}
