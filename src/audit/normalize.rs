//! Record normalization
//!
//! Projects heterogeneous remote records into uniform string-keyed rows.
//! Attribute names are converted to snake_case and sensitive payload
//! fields are always stripped, whether or not they were present.

use serde_json::Map;

use crate::models::{NormalizedRow, RecordAttributes};

/// Binary payload attributes that must never reach the output.
const REDACTED_FIELDS: &[&str] = &["certificate_content", "profile_content"];

/// Normalize one record. An absent record yields an absent row, which the
/// caller drops from its sequence rather than treating as an error.
pub fn normalize<R: RecordAttributes>(record: Option<&R>) -> Option<NormalizedRow> {
    let record = record?;

    let mut data = Map::new();
    for (key, value) in record.attributes() {
        data.insert(snake_case(&key), value);
    }
    for field in REDACTED_FIELDS {
        data.remove(*field);
    }

    Some(NormalizedRow::new(data))
}

/// Normalize a fetched sequence, dropping absent records.
pub fn normalize_all<R: RecordAttributes>(records: &[R]) -> Vec<NormalizedRow> {
    records
        .iter()
        .filter_map(|record| normalize(Some(record)))
        .collect()
}

/// Convert an API attribute name (`expirationDate`) to the row key form
/// (`expiration_date`). Names already in snake_case pass through.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
