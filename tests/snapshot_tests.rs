use petstore_e2e::session::snapshot::{
    Cookie, OriginState, SessionSnapshot, StorageItem,
};
use petstore_e2e::suite::error::SuiteError;

fn sample_snapshot() -> SessionSnapshot {
    SessionSnapshot {
        cookies: vec![Cookie {
            name: "session".into(),
            value: "abc123".into(),
            domain: "localhost".into(),
            path: "/".into(),
            expires: -1.0,
            http_only: true,
            secure: false,
            same_site: Some("Lax".into()),
        }],
        origins: vec![OriginState {
            origin: "http://localhost:4200".into(),
            local_storage: vec![StorageItem {
                name: "auth-token".into(),
                value: "eyJhbGciOi".into(),
            }],
        }],
    }
}

// =========================================================================
// Serde shape: Playwright storageState field names
// =========================================================================

#[test]
fn snapshot_serializes_in_storage_state_format() {
    let snapshot = sample_snapshot();
    let json: serde_json::Value = serde_json::to_value(&snapshot).expect("serialize");

    assert_eq!(json["cookies"][0]["httpOnly"], true, "http_only must serialize as 'httpOnly'");
    assert_eq!(json["cookies"][0]["sameSite"], "Lax", "same_site must serialize as 'sameSite'");
    assert_eq!(
        json["origins"][0]["localStorage"][0]["name"],
        "auth-token",
        "local_storage must serialize as 'localStorage'"
    );

    assert!(json["cookies"][0].get("http_only").is_none());
    assert!(json["origins"][0].get("local_storage").is_none());
}

#[test]
fn snapshot_deserializes_engine_output() {
    let json = r#"{
        "cookies": [
            {"name": "session", "value": "xyz", "domain": "localhost", "path": "/", "expires": 1924905600, "httpOnly": true, "secure": true, "sameSite": "Strict"}
        ],
        "origins": [
            {"origin": "http://localhost:4200", "localStorage": [{"name": "auth-token", "value": "tok"}]}
        ]
    }"#;

    let snapshot: SessionSnapshot = serde_json::from_str(json).expect("parse");
    assert_eq!(snapshot.cookies.len(), 1);
    assert!(snapshot.cookies[0].http_only);
    assert_eq!(snapshot.cookies[0].same_site.as_deref(), Some("Strict"));
    assert_eq!(snapshot.origins[0].local_storage[0].value, "tok");
    assert!(!snapshot.is_empty());
}

#[test]
fn snapshot_deserializes_with_missing_sections() {
    // The engine omits sections it has nothing for
    let snapshot: SessionSnapshot = serde_json::from_str(r#"{"cookies": []}"#).expect("parse");
    assert!(snapshot.is_empty());

    let snapshot: SessionSnapshot = serde_json::from_str("{}").expect("parse");
    assert!(snapshot.is_empty());
}

#[test]
fn cookie_expires_defaults_to_session_cookie() {
    let json = r#"{"name": "s", "value": "v", "domain": "localhost", "path": "/"}"#;
    let cookie: Cookie = serde_json::from_str(json).expect("parse");
    assert_eq!(cookie.expires, -1.0);
    assert!(!cookie.http_only);
}

// =========================================================================
// Empty marker
// =========================================================================

#[test]
fn empty_snapshot_is_empty_and_roundtrips() {
    let empty = SessionSnapshot::empty();
    assert!(empty.is_empty());

    let json = serde_json::to_string(&empty).expect("serialize");
    let back: SessionSnapshot = serde_json::from_str(&json).expect("parse");
    assert_eq!(empty, back);
}

// =========================================================================
// Save / load
// =========================================================================

#[test]
fn snapshot_save_then_load_roundtrips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("auth-state.json");

    let snapshot = sample_snapshot();
    snapshot.save(&path).expect("save");

    let loaded = SessionSnapshot::load(&path).expect("load");
    assert_eq!(snapshot, loaded);
}

#[test]
fn snapshot_save_overwrites_previous() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("auth-state.json");

    sample_snapshot().save(&path).expect("first save");
    SessionSnapshot::empty().save(&path).expect("second save");

    let loaded = SessionSnapshot::load(&path).expect("load");
    assert!(loaded.is_empty(), "second save must fully replace the first");
}

#[test]
fn snapshot_load_missing_file_fails_fast() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("never-written.json");

    match SessionSnapshot::load(&path) {
        Err(SuiteError::Snapshot { reason, .. }) => {
            assert!(reason.contains("cannot read"), "reason was: {}", reason);
        }
        other => panic!("Expected Snapshot error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn snapshot_load_malformed_file_fails_fast() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("auth-state.json");
    std::fs::write(&path, "{not json").expect("write");

    match SessionSnapshot::load(&path) {
        Err(SuiteError::Snapshot { reason, .. }) => {
            assert!(reason.contains("malformed"), "reason was: {}", reason);
        }
        other => panic!("Expected Snapshot error, got {:?}", other.map(|_| ())),
    }
}

// =========================================================================
// Digest
// =========================================================================

#[test]
fn snapshot_digest_is_stable_and_distinguishes_content() {
    let a = sample_snapshot();
    let b = sample_snapshot();
    assert_eq!(a.digest(), b.digest(), "same content, same digest");

    let empty = SessionSnapshot::empty();
    assert_ne!(a.digest(), empty.digest());

    // sha1 hex
    assert_eq!(a.digest().len(), 40);
    assert!(a.digest().chars().all(|c| c.is_ascii_hexdigit()));
}

// =========================================================================
// from_value (driver dump)
// =========================================================================

#[test]
fn snapshot_from_value_accepts_driver_dump() {
    let state = serde_json::json!({
        "cookies": [{"name": "s", "value": "v", "domain": "localhost", "path": "/"}],
        "origins": []
    });
    let snapshot = SessionSnapshot::from_value(state).expect("convert");
    assert_eq!(snapshot.cookies.len(), 1);
}

#[test]
fn snapshot_from_value_rejects_wrong_shape() {
    let state = serde_json::json!({"cookies": "nope"});
    assert!(SessionSnapshot::from_value(state).is_err());
}
