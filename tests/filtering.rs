use chrono::{TimeZone, Utc};
use codesign_audit::audit::{apply, normalize, AssetKind, SelectionCriteria, Status, TypeClass};
use codesign_audit::NormalizedRow;
use serde_json::json;
use std::collections::BTreeSet;

fn row(value: serde_json::Value) -> NormalizedRow {
    let map = value.as_object().expect("test row must be an object").clone();
    normalize(Some(&map)).expect("present record normalizes")
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn names(rows: &[NormalizedRow]) -> Vec<&str> {
    rows.iter().map(|r| r.get_str("name").unwrap()).collect()
}

#[test]
fn unrestricted_criteria_keep_everything() {
    let certs = vec![row(json!({"name": "a"})), row(json!({"name": "b"}))];
    let profiles = vec![row(json!({"name": "p"}))];

    let (certs, profiles) = apply(certs, profiles, &SelectionCriteria::default(), now());
    assert_eq!(names(&certs), vec!["a", "b"]);
    assert_eq!(names(&profiles), vec!["p"]);
}

#[test]
fn asset_exclusion_is_absolute() {
    let certs = vec![row(json!({"name": "a", "expirationDate": "2020-01-01T00:00:00Z"}))];
    // This profile would pass the status filter, but the asset stage
    // empties the sequence first.
    let profiles = vec![row(
        json!({"name": "p", "expirationDate": "2020-01-01T00:00:00Z"}),
    )];

    let criteria = SelectionCriteria {
        statuses: Some(BTreeSet::from([Status::Expired])),
        types: None,
        assets: Some(BTreeSet::from([AssetKind::Certificates])),
    };

    let (certs, profiles) = apply(certs, profiles, &criteria, now());
    assert_eq!(names(&certs), vec!["a"]);
    assert!(profiles.is_empty());
}

#[test]
fn status_filter_keeps_rows_whose_set_intersects() {
    let profiles = vec![
        row(json!({"name": "expired", "expirationDate": "2020-01-01T00:00:00Z"})),
        row(json!({"name": "healthy", "expirationDate": "2030-01-01T00:00:00Z"})),
        row(json!({"name": "invalid", "profileState": "INVALID"})),
    ];

    let criteria = SelectionCriteria {
        statuses: Some(BTreeSet::from([Status::ExpiringSoon, Status::Invalid])),
        types: None,
        assets: None,
    };

    let (_, profiles) = apply(Vec::new(), profiles, &criteria, now());
    assert_eq!(names(&profiles), vec!["invalid"]);
}

#[test]
fn type_filter_applies_after_status() {
    let certs = vec![
        row(json!({"name": "dev", "certificateType": "IOS_DEVELOPMENT"})),
        row(json!({"name": "dist", "certificateType": "IOS_DISTRIBUTION"})),
    ];

    let criteria = SelectionCriteria {
        statuses: None,
        types: Some(BTreeSet::from([TypeClass::Development])),
        assets: None,
    };

    let (certs, _) = apply(certs, Vec::new(), &criteria, now());
    assert_eq!(names(&certs), vec!["dev"]);
}

#[test]
fn profiles_sort_ascending_with_undated_rows_last() {
    let profiles = vec![
        row(json!({"name": "undated-1"})),
        row(json!({"name": "late", "expirationDate": "2030-01-01T00:00:00Z"})),
        row(json!({"name": "undated-2", "expirationDate": "garbage"})),
        row(json!({"name": "early", "expirationDate": "2026-06-01T00:00:00Z"})),
    ];

    let (_, profiles) = apply(Vec::new(), profiles, &SelectionCriteria::default(), now());
    // Dated rows ascend; undated rows follow in their original order.
    assert_eq!(
        names(&profiles),
        vec!["early", "late", "undated-1", "undated-2"]
    );
}

#[test]
fn certificates_keep_fetch_order() {
    let certs = vec![
        row(json!({"name": "z", "expirationDate": "2030-01-01T00:00:00Z"})),
        row(json!({"name": "a", "expirationDate": "2026-06-01T00:00:00Z"})),
    ];

    let (certs, _) = apply(certs, Vec::new(), &SelectionCriteria::default(), now());
    assert_eq!(names(&certs), vec!["z", "a"]);
}

#[test]
fn restricted_empty_status_set_excludes_everything() {
    let certs = vec![row(json!({"name": "a"}))];
    let criteria = SelectionCriteria {
        statuses: Some(BTreeSet::new()),
        types: None,
        assets: None,
    };

    let (certs, _) = apply(certs, Vec::new(), &criteria, now());
    assert!(certs.is_empty());
}
