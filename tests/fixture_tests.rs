use std::cell::RefCell;
use std::rc::Rc;

use petstore_e2e::fixture::page::with_authenticated_page;
use petstore_e2e::fixture::scope::FixtureScope;
use petstore_e2e::suite::error::SuiteError;

mod common;
use common::utils::temp_config;

// =========================================================================
// FixtureScope teardown ordering
// =========================================================================

#[test]
fn scope_runs_teardowns_last_acquired_first_released() {
    let order = Rc::new(RefCell::new(Vec::new()));

    {
        let mut scope = FixtureScope::new();

        let o = Rc::clone(&order);
        scope.defer(move || o.borrow_mut().push("context"));

        let o = Rc::clone(&order);
        scope.defer(move || o.borrow_mut().push("page"));

        let o = Rc::clone(&order);
        scope.defer(move || o.borrow_mut().push("page-object"));

        assert_eq!(scope.len(), 3);
        assert!(order.borrow().is_empty(), "nothing released while scope lives");
    }

    // Dependents release before their dependencies
    assert_eq!(*order.borrow(), vec!["page-object", "page", "context"]);
}

#[test]
fn scope_runs_teardowns_on_panic_unwind() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let o = Rc::clone(&order);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let mut scope = FixtureScope::new();
        let inner = Rc::clone(&o);
        scope.defer(move || inner.borrow_mut().push("released"));
        panic!("test body failed");
    }));

    assert!(result.is_err());
    assert_eq!(*order.borrow(), vec!["released"]);
}

#[test]
fn empty_scope_is_a_noop() {
    let scope = FixtureScope::new();
    assert!(scope.is_empty());
    drop(scope);
}

// =========================================================================
// Authenticated-page fixture fail-fast behavior
// =========================================================================

#[test]
fn authenticated_page_fails_fast_when_snapshot_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = temp_config(dir.path());

    let result = with_authenticated_page(&config, |_driver| -> Result<(), SuiteError> {
        panic!("must not reach the consumer without a snapshot")
    });

    match result {
        Err(SuiteError::Snapshot { path, .. }) => {
            assert!(path.contains("auth-state.json"));
        }
        other => panic!("Expected Snapshot error, got {:?}", other),
    }
}

#[test]
fn authenticated_page_fails_fast_when_snapshot_malformed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = temp_config(dir.path());
    std::fs::write(&config.snapshot_path, "][ not json").expect("write");

    let result = with_authenticated_page(&config, |_driver| Ok(()));

    match result {
        Err(SuiteError::Snapshot { reason, .. }) => {
            assert!(reason.contains("malformed"), "reason was: {}", reason);
        }
        other => panic!("Expected Snapshot error, got {:?}", other),
    }
}
