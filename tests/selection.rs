use codesign_audit::audit::{AssetKind, Status, TypeClass};
use codesign_audit::config::{parse_assets, parse_statuses, parse_types};
use codesign_audit::AuditError;
use std::collections::BTreeSet;

#[test]
fn aliases_resolve_to_canonical_statuses() {
    let parsed = parse_statuses("expiring,invalid").unwrap();
    assert_eq!(
        parsed,
        BTreeSet::from([Status::ExpiringSoon, Status::Invalid])
    );
}

#[test]
fn unknown_status_token_names_the_offender() {
    let err = parse_statuses("bogus").unwrap_err();
    match err {
        AuditError::Config(message) => {
            assert!(message.contains("bogus"), "message: {message}");
            assert!(
                message.contains("expired, expiring_soon, invalid, ok"),
                "message: {message}"
            );
        }
        other => panic!("expected Config error, got: {other}"),
    }
}

#[test]
fn tokens_are_trimmed_lowercased_and_deduplicated() {
    let parsed = parse_statuses(" EXPIRED , expired ,, Expiring ").unwrap();
    assert_eq!(
        parsed,
        BTreeSet::from([Status::Expired, Status::ExpiringSoon])
    );
}

#[test]
fn legacy_ok_aliases_still_work() {
    assert_eq!(
        parse_statuses("good").unwrap(),
        BTreeSet::from([Status::Ok])
    );
    assert_eq!(
        parse_statuses("fine").unwrap(),
        BTreeSet::from([Status::Ok])
    );
}

#[test]
fn every_invalid_token_is_listed_once() {
    let err = parse_statuses("bogus,junk,bogus").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bogus, junk"), "message: {message}");
}

#[test]
fn type_tokens_and_aliases() {
    assert_eq!(
        parse_types("dev,distribution").unwrap(),
        BTreeSet::from([TypeClass::Development, TypeClass::Distribution])
    );
    assert!(parse_types("retail").is_err());
}

#[test]
fn asset_tokens_and_aliases() {
    assert_eq!(
        parse_assets("certs").unwrap(),
        BTreeSet::from([AssetKind::Certificates])
    );
    assert_eq!(
        parse_assets("certificates,profiles").unwrap(),
        BTreeSet::from([AssetKind::Certificates, AssetKind::Profiles])
    );
    assert!(parse_assets("devices").is_err());
}

#[test]
fn empty_tokens_are_ignored() {
    let parsed = parse_assets(",profiles,").unwrap();
    assert_eq!(parsed, BTreeSet::from([AssetKind::Profiles]));
}
