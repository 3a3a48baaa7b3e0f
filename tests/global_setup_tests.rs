use std::path::Path;

use petstore_e2e::data::provider::CredentialProvider;
use petstore_e2e::session::global_setup::{GlobalSetup, SetupOutcome};
use petstore_e2e::session::snapshot::SessionSnapshot;
use petstore_e2e::trace::logger::RunLogger;

mod common;
use common::utils::temp_config;

const USERS_JSON: &str = r#"{
    "users": {
        "admin": {"username": "admin@petstore.example", "password": "welcome01"}
    }
}"#;

// =========================================================================
// Snapshot artifact guarantee
// =========================================================================

#[test]
fn degraded_setup_still_persists_a_loadable_empty_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = temp_config(dir.path());
    // A helper script that does not exist forces the degraded path without
    // needing a browser.
    config.driver_script = dir.path().join("no-such-helper.js").display().to_string();

    let provider = CredentialProvider::from_json(USERS_JSON).expect("parse");
    let outcome = GlobalSetup::run(&config, &provider, &RunLogger::disabled());

    match outcome {
        SetupOutcome::Degraded { reason } => {
            assert!(!reason.is_empty(), "degraded outcome names its cause");
        }
        other => panic!("Expected Degraded, got {:?}", other),
    }

    let snapshot = SessionSnapshot::load(Path::new(&config.snapshot_path))
        .expect("snapshot file exists and parses after a degraded setup");
    assert!(snapshot.is_empty(), "degraded setup persists the empty snapshot");
}

#[test]
fn setup_without_admin_credential_degrades_and_persists_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = temp_config(dir.path());
    config.driver_script = dir.path().join("no-such-helper.js").display().to_string();

    let provider = CredentialProvider::from_json(r#"{"users": {}}"#).expect("parse");
    let outcome = GlobalSetup::run(&config, &provider, &RunLogger::disabled());

    match outcome {
        SetupOutcome::Degraded { reason } => {
            assert!(reason.contains("admin"), "reason was: {}", reason);
        }
        other => panic!("Expected Degraded, got {:?}", other),
    }

    assert!(
        Path::new(&config.snapshot_path).exists(),
        "a snapshot file exists even when setup never reached the browser"
    );
}

// =========================================================================
// Run log records the outcome
// =========================================================================

#[test]
fn degraded_setup_is_visible_in_the_run_log() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = temp_config(dir.path());
    config.driver_script = dir.path().join("no-such-helper.js").display().to_string();

    let provider = CredentialProvider::from_json(USERS_JSON).expect("parse");
    let log = RunLogger::new(&config.run_log);
    GlobalSetup::run(&config, &provider, &log);

    let contents = std::fs::read_to_string(&config.run_log).expect("run log written");
    assert!(contents.contains("\"event\":\"setup_started\""));
    assert!(contents.contains("\"event\":\"setup_degraded\""));
    // The attempted username is recorded; the password never is.
    assert!(contents.contains("admin@petstore.example"));
    assert!(!contents.contains("welcome01"));
}
