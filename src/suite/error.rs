use std::fmt;

use crate::browser::error::DriverError;

#[derive(Debug)]
pub enum SuiteError {
    /// Browser driver failure (spawn, protocol, wait timeout)
    Driver(DriverError),

    /// Filesystem I/O failed
    Io { context: String, source: std::io::Error },

    /// JSON (de)serialization failed
    Json { context: String, source: serde_json::Error },

    /// Session snapshot missing or malformed; global setup did not run
    /// or its artifact was corrupted
    Snapshot { path: String, reason: String },

    /// No credential registered for the requested role
    MissingCredential(String),

    /// An observable UI state did not match what the test expected
    Assertion(String),
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteError::Driver(e) => write!(f, "{}", e),
            SuiteError::Io { context, source } => {
                write!(f, "I/O error ({}): {}", context, source)
            }
            SuiteError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            SuiteError::Snapshot { path, reason } => {
                write!(f, "Session snapshot '{}' unusable ({}); run global setup first", path, reason)
            }
            SuiteError::MissingCredential(role) => {
                write!(f, "No credential for role '{}' in the users fixture", role)
            }
            SuiteError::Assertion(msg) => {
                write!(f, "Assertion failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for SuiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuiteError::Driver(e) => Some(e),
            SuiteError::Io { source, .. } => Some(source),
            SuiteError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<DriverError> for SuiteError {
    fn from(e: DriverError) -> Self {
        SuiteError::Driver(e)
    }
}

/// Fail a test with `msg` unless `cond` holds.
pub fn ensure(cond: bool, msg: impl Into<String>) -> Result<(), SuiteError> {
    if cond {
        Ok(())
    } else {
        Err(SuiteError::Assertion(msg.into()))
    }
}
