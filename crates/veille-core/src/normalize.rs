//! Field normalization helpers shared by the adapters and the pipeline.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Maximum number of characters kept in a stored summary.
const SUMMARY_MAX_CHARS: usize = 200;

/// Marker appended to a truncated summary.
const SUMMARY_MARKER: &str = "...";

/// Derive the stored summary from article content.
///
/// Non-empty content yields its first 200 characters followed by `"..."`;
/// empty content yields the empty string. Truncation counts characters, not
/// bytes, so multi-byte text never splits mid-character.
#[must_use]
pub fn summarize(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }
    let head: String = content.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{head}{SUMMARY_MARKER}")
}

/// Parse a provider-supplied publication date into a UTC timestamp.
///
/// Accepts, in order: RFC 3339 (`2024-03-01T10:15:00Z`, Mediastack), the
/// space-separated naive form `2024-03-01 10:15:00` (Newsdata, taken as UTC),
/// and a bare `2024-03-01` date (midnight UTC). Anything else, including the
/// empty string, is `None` — unparseable dates are an ordering concern, not
/// an error.
#[must_use]
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
