use petstore_e2e::trace::logger::RunLogger;
use petstore_e2e::trace::run_log::RunEvent;

// =========================================================================
// RunEvent wire shapes
// =========================================================================

#[test]
fn events_serialize_with_snake_case_tags() {
    let event = RunEvent::SetupStarted {
        base_url: "http://localhost:4200".into(),
    };
    let json = serde_json::to_string(&event).expect("serialize");
    assert!(json.contains("\"event\":\"setup_started\""));
    assert!(json.contains("\"base_url\":\"http://localhost:4200\""));

    let event = RunEvent::SetupAuthenticated {
        username: "admin@petstore.example".into(),
        snapshot_digest: "da39a3ee5e6b4b0d3255bfef95601890afd80709".into(),
    };
    let json = serde_json::to_string(&event).expect("serialize");
    assert!(json.contains("\"event\":\"setup_authenticated\""));
    assert!(json.contains("snapshot_digest"));
}

#[test]
fn login_rejected_omits_absent_error() {
    let event = RunEvent::SetupLoginRejected {
        username: "admin@petstore.example".into(),
        error: None,
    };
    let json = serde_json::to_string(&event).expect("serialize");
    assert!(json.contains("\"event\":\"setup_login_rejected\""));
    assert!(!json.contains("error"), "absent error must be skipped");

    let event = RunEvent::SetupLoginRejected {
        username: "admin@petstore.example".into(),
        error: Some("Invalid email or password".into()),
    };
    let json = serde_json::to_string(&event).expect("serialize");
    assert!(json.contains("\"error\":\"Invalid email or password\""));
}

#[test]
fn case_finished_roundtrips() {
    let event = RunEvent::CaseFinished {
        name: "short name blocks submission".into(),
        passed: false,
        duration_ms: 3120,
        error: Some("submit stayed enabled".into()),
    };
    let json = serde_json::to_string(&event).expect("serialize");
    assert!(json.contains("\"event\":\"case_finished\""));

    let back: RunEvent = serde_json::from_str(&json).expect("parse");
    assert_eq!(back, event);
}

#[test]
fn suite_finished_carries_totals() {
    let json = serde_json::to_string(&RunEvent::SuiteFinished {
        total: 6,
        passed: 5,
        failed: 1,
        duration_ms: 48_200,
    })
    .expect("serialize");

    assert!(json.contains("\"event\":\"suite_finished\""));
    assert!(json.contains("\"total\":6"));
    assert!(json.contains("\"failed\":1"));
}

// =========================================================================
// RunLogger file behavior
// =========================================================================

#[test]
fn logger_appends_one_json_line_per_event() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("run.jsonl");
    let log = RunLogger::new(path.to_str().unwrap());

    log.log(&RunEvent::SetupStarted {
        base_url: "http://localhost:4200".into(),
    });
    log.log(&RunEvent::CaseStarted {
        name: "home shows title when authenticated".into(),
    });

    let contents = std::fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    // Every line must parse back on its own
    for line in &lines {
        let _: RunEvent = serde_json::from_str(line).expect("line parses");
    }
    assert!(lines[0].contains("setup_started"));
    assert!(lines[1].contains("case_started"));
}

#[test]
fn logger_appends_across_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("run.jsonl");

    RunLogger::new(path.to_str().unwrap()).log(&RunEvent::SetupStarted {
        base_url: "http://localhost:4200".into(),
    });
    RunLogger::new(path.to_str().unwrap()).log(&RunEvent::SuiteFinished {
        total: 0,
        passed: 0,
        failed: 0,
        duration_ms: 0,
    });

    let contents = std::fs::read_to_string(&path).expect("read log");
    assert_eq!(contents.lines().count(), 2, "second run must not truncate");
}

#[test]
fn disabled_logger_writes_nothing() {
    let log = RunLogger::disabled();
    // Must not panic or touch the filesystem
    log.log(&RunEvent::CaseStarted {
        name: "home shows title when authenticated".into(),
    });
}
