use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::pet::NewPet;
use crate::suite::error::SuiteError;

/// A named user record from the static users fixture. Returned verbatim,
/// no transformation of the stored values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct UsersFixture {
    users: HashMap<String, Credential>,
}

/// Read-only lookup of user records keyed by role, loaded from a static
/// JSON fixture at test-run time.
#[derive(Debug, Clone)]
pub struct CredentialProvider {
    users: HashMap<String, Credential>,
}

impl CredentialProvider {
    /// Load the users fixture from disk (e.g. `fixtures/users.json`).
    pub fn from_file(path: &Path) -> Result<Self, SuiteError> {
        let content = std::fs::read_to_string(path).map_err(|e| SuiteError::Io {
            context: format!("reading users fixture {}", path.display()),
            source: e,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, SuiteError> {
        let fixture: UsersFixture = serde_json::from_str(content).map_err(|e| SuiteError::Json {
            context: "users fixture".into(),
            source: e,
        })?;
        Ok(CredentialProvider {
            users: fixture.users,
        })
    }

    /// Look up a credential by role.
    pub fn get(&self, role: &str) -> Option<&Credential> {
        self.users.get(role)
    }

    /// The designated admin credential used by global setup.
    pub fn admin(&self) -> Result<&Credential, SuiteError> {
        self.get("admin")
            .ok_or_else(|| SuiteError::MissingCredential("admin".into()))
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(|k| k.as_str())
    }
}

/// Load the static invalid-record fixture used by negative-path scenarios
/// (e.g. `fixtures/invalid-pet.json`, a name below the length minimum).
pub fn invalid_pet(path: &Path) -> Result<NewPet, SuiteError> {
    let content = std::fs::read_to_string(path).map_err(|e| SuiteError::Io {
        context: format!("reading invalid pet fixture {}", path.display()),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SuiteError::Json {
        context: "invalid pet fixture".into(),
        source: e,
    })
}
