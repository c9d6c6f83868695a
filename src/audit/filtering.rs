//! Filter & sort engine
//!
//! Applies the inclusion criteria to the normalized rows in a fixed stage
//! order: asset kind, then status, then type, then the profile expiration
//! sort. No other stage reorders rows; certificate ordering is left to the
//! renderer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::audit::classify::{statuses_for, type_class_for, Status, TypeClass};
use crate::models::NormalizedRow;
use crate::utils::time;

/// The two asset kinds the audit covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Certificates,
    Profiles,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Certificates => "certificates",
            AssetKind::Profiles => "profiles",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusion criteria for the filter stage. An unset dimension means
/// "include all" for that dimension.
#[derive(Debug, Clone, Default)]
pub struct SelectionCriteria {
    pub statuses: Option<BTreeSet<Status>>,
    pub types: Option<BTreeSet<TypeClass>>,
    pub assets: Option<BTreeSet<AssetKind>>,
}

impl SelectionCriteria {
    pub fn includes_asset(&self, kind: AssetKind) -> bool {
        self.assets
            .as_ref()
            .map_or(true, |assets| assets.contains(&kind))
    }
}

/// Run the filter stages over both row sequences and return the surviving
/// rows, with profiles in final expiration order.
pub fn apply(
    mut certificate_rows: Vec<NormalizedRow>,
    mut profile_rows: Vec<NormalizedRow>,
    criteria: &SelectionCriteria,
    now: DateTime<Utc>,
) -> (Vec<NormalizedRow>, Vec<NormalizedRow>) {
    // Asset-kind exclusion is absolute: it empties the sequence before any
    // other filter can see it.
    if !criteria.includes_asset(AssetKind::Certificates) {
        certificate_rows.clear();
    }
    if !criteria.includes_asset(AssetKind::Profiles) {
        profile_rows.clear();
    }

    if let Some(statuses) = &criteria.statuses {
        retain_by_status(&mut certificate_rows, statuses, now);
        retain_by_status(&mut profile_rows, statuses, now);
    }

    if let Some(types) = &criteria.types {
        retain_by_type(&mut certificate_rows, types);
        retain_by_type(&mut profile_rows, types);
    }

    // Stable sort: undated rows stay in fetch order after all dated ones.
    profile_rows.sort_by_key(time::sort_key_by_expiration);

    (certificate_rows, profile_rows)
}

fn retain_by_status(
    rows: &mut Vec<NormalizedRow>,
    included: &BTreeSet<Status>,
    now: DateTime<Utc>,
) {
    rows.retain(|row| {
        statuses_for(row, now)
            .iter()
            .any(|status| included.contains(status))
    });
}

fn retain_by_type(rows: &mut Vec<NormalizedRow>, included: &BTreeSet<TypeClass>) {
    rows.retain(|row| included.contains(&type_class_for(row)));
}
