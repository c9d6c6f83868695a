//! Date parsing and expiration arithmetic shared by the classifier,
//! filter engine, and renderers.
//!
//! Remote records carry timestamps as strings. Parsing is deliberately
//! forgiving: strict RFC 3339 first, then a couple of lenient fallbacks.
//! Anything unparseable is treated as "no date known" rather than an error.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::models::NormalizedRow;

/// Human-readable date format used by the table renderer ("Mar 4, 2026")
pub const HUMAN_DATE_FORMAT: &str = "%b %-d, %Y";

/// Parse a textual timestamp into a UTC instant.
///
/// Tries strict RFC 3339 first, then RFC 2822, then `%Y-%m-%d %H:%M:%S`
/// (with or without a trailing `UTC`), then a bare calendar date which is
/// taken as that date's start. Returns `None` for anything else.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    let bare = value.trim_end_matches(" UTC");
    if let Ok(parsed) = NaiveDateTime::parse_from_str(bare, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(bare, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Parse a JSON attribute value into a UTC instant, if it holds one.
pub fn parse_datetime_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_datetime(text),
        _ => None,
    }
}

/// The row's expiration instant, if its `expiration_date` attribute parses.
pub fn expiration_date(row: &NormalizedRow) -> Option<DateTime<Utc>> {
    row.get("expiration_date").and_then(parse_datetime_value)
}

/// Whole days between today and the row's expiration date, both in UTC.
/// Negative once expired. `None` when no parseable expiration exists.
pub fn days_until_expiration(row: &NormalizedRow, now: DateTime<Utc>) -> Option<i64> {
    let expiration = expiration_date(row)?;
    Some(
        expiration
            .date_naive()
            .signed_duration_since(now.date_naive())
            .num_days(),
    )
}

/// Sort key for expiration ordering: dated rows ascend by timestamp,
/// undated rows sort after every dated one. Used with a stable sort so
/// undated rows keep their fetch order.
pub fn sort_key_by_expiration(row: &NormalizedRow) -> (u8, i64) {
    match expiration_date(row) {
        Some(expiration) => (0, expiration.timestamp()),
        None => (1, i64::MAX),
    }
}

/// Whether the row's expiration is strictly in the past.
pub fn is_expired(row: &NormalizedRow, now: DateTime<Utc>) -> bool {
    matches!(expiration_date(row), Some(expiration) if expiration < now)
}

/// Whether the row expires within the lookahead window (boundary inclusive).
pub fn is_expiring_soon(row: &NormalizedRow, now: DateTime<Utc>, window_days: i64) -> bool {
    matches!(
        expiration_date(row),
        Some(expiration) if expiration <= now + Duration::days(window_days)
    )
}

/// Render an attribute value for table output. Date-valued fields are
/// humanized; other strings pass through unquoted; arrays render their
/// items comma-separated; anything else falls back to compact JSON.
pub fn display_value(key: &str, value: &Value, date_fields: &[&str]) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => {
            if date_fields.contains(&key) {
                if let Some(parsed) = parse_datetime(text) {
                    return parsed.format(HUMAN_DATE_FORMAT).to_string();
                }
            }
            text.clone()
        }
        Value::Array(items) => items
            .iter()
            .map(|item| display_value(key, item, date_fields))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
