//! Filter selection parsing
//!
//! Each filter dimension takes a comma-separated token list. Tokens are
//! trimmed, lower-cased, de-duplicated, resolved through a fixed alias
//! table, and validated against a closed vocabulary. Unknown tokens fail
//! with a configuration error naming both the offenders and the valid
//! vocabulary.

use std::collections::BTreeSet;

use crate::audit::{AssetKind, Status, TypeClass};
use crate::error::{AuditError, Result};

const STATUS_VOCABULARY: &[&str] = &["expired", "expiring_soon", "invalid", "ok"];
const TYPE_VOCABULARY: &[&str] = &["development", "distribution"];
const ASSET_VOCABULARY: &[&str] = &["certificates", "profiles"];

/// Parse a `--status` token list.
pub fn parse_statuses(input: &str) -> Result<BTreeSet<Status>> {
    parse_tokens(input, "status", STATUS_VOCABULARY, |token| match token {
        "expired" => Some(Status::Expired),
        "expiring_soon" | "expiring-soon" | "expiring" => Some(Status::ExpiringSoon),
        "invalid" => Some(Status::Invalid),
        "ok" | "good" | "fine" => Some(Status::Ok),
        _ => None,
    })
}

/// Parse a `--type` token list.
pub fn parse_types(input: &str) -> Result<BTreeSet<TypeClass>> {
    parse_tokens(input, "type", TYPE_VOCABULARY, |token| match token {
        "development" | "dev" => Some(TypeClass::Development),
        "distribution" | "dist" => Some(TypeClass::Distribution),
        _ => None,
    })
}

/// Parse an `--assets` token list.
pub fn parse_assets(input: &str) -> Result<BTreeSet<AssetKind>> {
    parse_tokens(input, "asset", ASSET_VOCABULARY, |token| match token {
        "certificates" | "certificate" | "certs" | "cert" => Some(AssetKind::Certificates),
        "profiles" | "profile" => Some(AssetKind::Profiles),
        _ => None,
    })
}

fn parse_tokens<T: Ord>(
    input: &str,
    dimension: &str,
    vocabulary: &[&str],
    resolve: impl Fn(&str) -> Option<T>,
) -> Result<BTreeSet<T>> {
    let mut selected = BTreeSet::new();
    let mut invalid: Vec<String> = Vec::new();

    for raw in input.split(',') {
        let token = raw.trim().to_ascii_lowercase();
        if token.is_empty() {
            continue;
        }
        match resolve(&token) {
            Some(value) => {
                selected.insert(value);
            }
            None => {
                if !invalid.contains(&token) {
                    invalid.push(token);
                }
            }
        }
    }

    if invalid.is_empty() {
        Ok(selected)
    } else {
        Err(AuditError::Config(format!(
            "Invalid {dimension} filter(s): {}. Expected: {}",
            invalid.join(", "),
            vocabulary.join(", ")
        )))
    }
}
