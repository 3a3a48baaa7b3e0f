use serde::{Deserialize, Serialize};

use crate::cli::config::SuiteConfig;
use crate::suite::error::SuiteError;

/// A registered test scenario. Scenarios are plain functions over the
/// suite config; every browser resource they need comes from the fixture
/// layer, so cases are independent and safe to run on parallel workers.
#[derive(Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub run: fn(&SuiteConfig) -> Result<(), SuiteError>,
}

impl TestCase {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

/// Result of running one test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    /// Name of the case that was run
    pub name: String,

    /// Whether the case completed without error
    pub passed: bool,

    /// Wall-clock execution time
    pub duration_ms: u128,

    /// Error message if the case failed (assertion, driver, or panic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaseResult {
    pub fn passed(name: &str, duration_ms: u128) -> Self {
        CaseResult {
            name: name.to_string(),
            passed: true,
            duration_ms,
            error: None,
        }
    }

    pub fn failed(name: &str, duration_ms: u128, error: String) -> Self {
        CaseResult {
            name: name.to_string(),
            passed: false,
            duration_ms,
            error: Some(error),
        }
    }
}
