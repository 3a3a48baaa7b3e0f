use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::cli::config::SuiteConfig;
use crate::data::provider::CredentialProvider;
use crate::report::report_model::SuiteReport;
use crate::session::global_setup::GlobalSetup;
use crate::suite::case::{CaseResult, TestCase};
use crate::trace::logger::RunLogger;
use crate::trace::run_log::RunEvent;

const SUITE_NAME: &str = "petstore-e2e";
const PREFLIGHT_TIMEOUT_SECS: u64 = 10;

/// Drives a full suite run: reachability preflight, global setup exactly
/// once, then the cases distributed round-robin across worker threads.
pub struct SuiteRunner;

impl SuiteRunner {
    pub fn run(
        config: &SuiteConfig,
        provider: &CredentialProvider,
        cases: Vec<TestCase>,
        log: &RunLogger,
        verbose: u8,
    ) -> SuiteReport {
        preflight(config);

        // Setup completes before any worker starts; from here the snapshot
        // file is read-only shared state.
        let outcome = GlobalSetup::run(config, provider, log);
        if verbose > 0 {
            eprintln!("Global setup outcome: {:?}", outcome);
        }

        let start = Instant::now();
        let workers = config.workers.max(1).min(cases.len().max(1));
        let indexed: Mutex<Vec<(usize, CaseResult)>> = Mutex::new(Vec::with_capacity(cases.len()));

        std::thread::scope(|scope| {
            for worker in 0..workers {
                let cases = &cases;
                let indexed = &indexed;
                scope.spawn(move || {
                    let mut i = worker;
                    while i < cases.len() {
                        let result = run_case(&cases[i], config, log, verbose);
                        indexed
                            .lock()
                            .unwrap_or_else(|poisoned| poisoned.into_inner())
                            .push((i, result));
                        i += workers;
                    }
                });
            }
        });

        let mut indexed = indexed
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Restore registration order for stable reports
        indexed.sort_by_key(|(i, _)| *i);
        let results: Vec<CaseResult> = indexed.into_iter().map(|(_, r)| r).collect();

        let duration_ms = start.elapsed().as_millis();
        let report = SuiteReport::from_results(SUITE_NAME, results).with_duration(duration_ms);

        log.log(&RunEvent::SuiteFinished {
            total: report.total,
            passed: report.passed,
            failed: report.failed,
            duration_ms: duration_ms as u64,
        });

        report
    }
}

/// Run one case, converting both errors and panics into a failed result.
/// A failing case never takes down the worker or the suite.
fn run_case(case: &TestCase, config: &SuiteConfig, log: &RunLogger, verbose: u8) -> CaseResult {
    log.log(&RunEvent::CaseStarted {
        name: case.name.to_string(),
    });
    if verbose > 0 {
        eprintln!("  Running: {}", case.name);
    }

    let start = Instant::now();
    let outcome = catch_unwind(AssertUnwindSafe(|| (case.run)(config)));
    let duration_ms = start.elapsed().as_millis();

    let result = match outcome {
        Ok(Ok(())) => CaseResult::passed(case.name, duration_ms),
        Ok(Err(e)) => CaseResult::failed(case.name, duration_ms, e.to_string()),
        Err(panic) => CaseResult::failed(case.name, duration_ms, panic_message(&panic)),
    };

    log.log(&RunEvent::CaseFinished {
        name: result.name.clone(),
        passed: result.passed,
        duration_ms: duration_ms as u64,
        error: result.error.clone(),
    });

    result
}

fn panic_message(panic: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        "panic: (non-string payload)".to_string()
    }
}

/// Warn-only reachability probe of the target application. A down target
/// shows up here once instead of as one timeout per test.
fn preflight(config: &SuiteConfig) {
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(PREFLIGHT_TIMEOUT_SECS))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: preflight client unavailable: {}", e);
            return;
        }
    };

    if let Err(e) = client.get(&config.base_url).send() {
        eprintln!(
            "Warning: target application '{}' is not reachable: {}",
            config.base_url, e
        );
    }
}
