use serde::{Deserialize, Serialize};

/// One line of the suite's JSONL run log.
///
/// Setup outcomes only show up here, never as a failed test; the run log is
/// the place to look when every authenticated scenario fails at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    SetupStarted {
        base_url: String,
    },
    /// Login succeeded; the persisted snapshot is authenticated.
    SetupAuthenticated {
        username: String,
        snapshot_digest: String,
    },
    /// Login was rejected by the application. The attempted username and
    /// the visible error are recorded for diagnosis.
    SetupLoginRejected {
        username: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// Setup hit an unexpected failure; an unauthenticated snapshot was
    /// persisted and fixtures will surface authentication failures locally.
    SetupDegraded {
        username: Option<String>,
        reason: String,
    },
    CaseStarted {
        name: String,
    },
    CaseFinished {
        name: String,
        passed: bool,
        duration_ms: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    SuiteFinished {
        total: usize,
        passed: usize,
        failed: usize,
        duration_ms: u64,
    },
}
