use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::suite::error::SuiteError;

/// Default path of the persisted session snapshot, relative to the suite's
/// working directory. Written once by global setup, read by every test that
/// requests an authenticated context.
pub const AUTH_STATE_PATH: &str = "auth-state.json";

/// Serialized browsing-context state in Playwright's `storageState` format:
/// cookies plus per-origin localStorage. Seeds new contexts as already
/// signed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    #[serde(default)]
    pub origins: Vec<OriginState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// Unix timestamp in seconds; -1 for session cookies
    #[serde(default = "default_expires")]
    pub expires: f64,
    #[serde(rename = "httpOnly", default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
    #[serde(rename = "sameSite", skip_serializing_if = "Option::is_none")]
    pub same_site: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginState {
    pub origin: String,
    #[serde(rename = "localStorage", default)]
    pub local_storage: Vec<StorageItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageItem {
    pub name: String,
    pub value: String,
}

fn default_expires() -> f64 {
    -1.0
}

impl SessionSnapshot {
    /// An unauthenticated snapshot. Written by global setup when login could
    /// not be established, so downstream fixtures always have a file to load.
    pub fn empty() -> Self {
        SessionSnapshot {
            cookies: Vec::new(),
            origins: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty() && self.origins.is_empty()
    }

    /// Build a snapshot from a raw `storage_state` dump.
    pub fn from_value(state: Value) -> Result<Self, SuiteError> {
        serde_json::from_value(state).map_err(|e| SuiteError::Json {
            context: "storage_state dump".into(),
            source: e,
        })
    }

    /// Load a snapshot from disk. Fails fast on a missing or malformed
    /// file; it is the caller's responsibility to have run global setup.
    pub fn load(path: &Path) -> Result<Self, SuiteError> {
        let content = std::fs::read_to_string(path).map_err(|e| SuiteError::Snapshot {
            path: path.display().to_string(),
            reason: format!("cannot read: {}", e),
        })?;
        serde_json::from_str(&content).map_err(|e| SuiteError::Snapshot {
            path: path.display().to_string(),
            reason: format!("malformed JSON: {}", e),
        })
    }

    /// Persist the snapshot, overwriting any previous one.
    pub fn save(&self, path: &Path) -> Result<(), SuiteError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| SuiteError::Json {
            context: "SessionSnapshot".into(),
            source: e,
        })?;
        std::fs::write(path, json).map_err(|e| SuiteError::Io {
            context: format!("writing snapshot to {}", path.display()),
            source: e,
        })
    }

    /// Stable sha1 fingerprint of the serialized snapshot, used in run logs
    /// to tell snapshots apart without dumping cookie values.
    pub fn digest(&self) -> String {
        use sha1::{Digest, Sha1};

        let json = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha1::new();
        hasher.update(json.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
