use codesign_audit::audit::{normalize, normalize_all};
use codesign_audit::models::ApiResource;
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().expect("object").clone()
}

fn resource(value: Value) -> ApiResource {
    serde_json::from_value(value).expect("resource")
}

#[test]
fn absent_record_yields_absent_row() {
    assert!(normalize::<ApiResource>(None).is_none());
}

#[test]
fn redacted_fields_never_survive() {
    let r = resource(json!({
        "id": "CERT1",
        "type": "certificates",
        "attributes": {
            "name": "Apple Distribution: Example Corp",
            "certificateContent": "MIIB...binary...",
            "expirationDate": "2030-01-01T00:00:00Z"
        }
    }));

    let row = normalize(Some(&r)).unwrap();
    assert!(!row.contains_key("certificate_content"));
    assert_eq!(row.get_str("name"), Some("Apple Distribution: Example Corp"));
}

#[test]
fn profile_content_is_redacted_too() {
    let map = object(json!({
        "name": "AppStore com.example.app",
        "profile_content": "base64-payload",
        "profileState": "ACTIVE"
    }));

    let row = normalize(Some(&map)).unwrap();
    assert!(!row.contains_key("profile_content"));
    assert_eq!(row.get_str("profile_state"), Some("ACTIVE"));
}

#[test]
fn both_record_shapes_normalize_identically() {
    let typed = resource(json!({
        "id": "PROF1",
        "type": "profiles",
        "attributes": {
            "name": "AdHoc com.example.app",
            "profileType": "IOS_APP_ADHOC",
            "expirationDate": "2027-05-01T00:00:00Z",
            "profileContent": "secret"
        }
    }));

    let hash_like = object(json!({
        "id": "PROF1",
        "name": "AdHoc com.example.app",
        "profileType": "IOS_APP_ADHOC",
        "expirationDate": "2027-05-01T00:00:00Z",
        "profileContent": "secret"
    }));

    let from_typed = normalize(Some(&typed)).unwrap();
    let from_hash = normalize(Some(&hash_like)).unwrap();
    assert_eq!(from_typed, from_hash);
    assert!(!from_typed.contains_key("profile_content"));
}

#[test]
fn attribute_keys_become_snake_case() {
    let r = resource(json!({
        "id": "CERT2",
        "type": "certificates",
        "attributes": {
            "displayName": "Example Corp",
            "certificateType": "DISTRIBUTION",
            "serialNumber": "ABC123",
            "platform": "IOS"
        }
    }));

    let row = normalize(Some(&r)).unwrap();
    assert_eq!(row.get_str("display_name"), Some("Example Corp"));
    assert_eq!(row.get_str("certificate_type"), Some("DISTRIBUTION"));
    assert_eq!(row.get_str("serial_number"), Some("ABC123"));
    assert_eq!(row.get_str("id"), Some("CERT2"));
}

#[test]
fn normalize_all_keeps_every_present_record() {
    let records = vec![
        resource(json!({"id": "A", "type": "certificates", "attributes": {"name": "one"}})),
        resource(json!({"id": "B", "type": "certificates", "attributes": {"name": "two"}})),
    ];

    let rows = normalize_all(&records);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get_str("name"), Some("one"));
    assert_eq!(rows[1].get_str("name"), Some("two"));
}
