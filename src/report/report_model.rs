use serde::{Deserialize, Serialize};

use crate::suite::case::CaseResult;

// ============================================================================
// Suite report, aggregated from individual CaseResult instances
// ============================================================================

/// Aggregated report for one suite run.
///
/// Built from a `Vec<CaseResult>` via `from_results()`. Consumed by the
/// console and JUnit reporters to produce human-readable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Name of the suite
    pub suite_name: String,

    /// Total number of cases
    pub total: usize,

    /// Number of passing cases
    pub passed: usize,

    /// Number of failing cases
    pub failed: usize,

    /// Total execution duration in milliseconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    /// Individual case results
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    /// Build a suite report from a list of case results.
    ///
    /// Automatically computes total, passed, and failed counts.
    pub fn from_results(suite_name: &str, results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            suite_name: suite_name.to_string(),
            total,
            passed,
            failed,
            duration_ms: None,
            results,
        }
    }

    /// Set the total execution duration.
    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Whether every case in the suite passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
