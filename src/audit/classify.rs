//! Status classification
//!
//! Pure functions deriving a status set and a type category from a row's
//! date and state attributes. The current instant is an explicit argument
//! so classification stays deterministic under test.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::models::NormalizedRow;
use crate::utils::time;

/// Lookahead window for the expiring-soon status
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

/// State attribute value marking an invalid profile
pub const INVALID_STATE: &str = "INVALID";

/// Health status of a certificate or profile row.
///
/// A row may hold several statuses at once (an invalid profile can also be
/// expired); `Ok` is present exactly when nothing else is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Expired,
    ExpiringSoon,
    Invalid,
    Ok,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Expired => "expired",
            Status::ExpiringSoon => "expiring_soon",
            Status::Invalid => "invalid",
            Status::Ok => "ok",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type category derived from the certificate/profile type attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeClass {
    Development,
    Distribution,
}

impl TypeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeClass::Development => "development",
            TypeClass::Distribution => "distribution",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the row's status set.
///
/// Rows with no parseable expiration date are never expired or expiring by
/// date but may still be invalid; failing that they are ok.
pub fn statuses_for(row: &NormalizedRow, now: DateTime<Utc>) -> Vec<Status> {
    let invalid_state = row.get_str("profile_state") == Some(INVALID_STATE);
    let expired = time::is_expired(row, now);
    let expiring_soon = !expired && time::is_expiring_soon(row, now, EXPIRING_WINDOW_DAYS);

    let mut statuses = Vec::new();
    if expired {
        statuses.push(Status::Expired);
    }
    if expiring_soon {
        statuses.push(Status::ExpiringSoon);
    }
    if invalid_state {
        statuses.push(Status::Invalid);
    }
    if statuses.is_empty() {
        statuses.push(Status::Ok);
    }
    statuses
}

/// Derive the row's type category. Anything matching "development"
/// case-insensitively counts as development; everything else, including a
/// missing type attribute, is distribution.
pub fn type_class_for(row: &NormalizedRow) -> TypeClass {
    let type_value = row
        .get_str("certificate_type")
        .or_else(|| row.get_str("profile_type"));

    match type_value {
        Some(value) if value.to_ascii_lowercase().contains("development") => {
            TypeClass::Development
        }
        _ => TypeClass::Distribution,
    }
}
