use std::path::Path;

use crate::browser::driver::PageDriver;
use crate::cli::config::{SuiteConfig, launch_options};
use crate::data::provider::CredentialProvider;
use crate::fixture::scope::FixtureScope;
use crate::pages::login::LoginPage;
use crate::session::snapshot::SessionSnapshot;
use crate::suite::error::SuiteError;
use crate::trace::logger::RunLogger;
use crate::trace::run_log::RunEvent;

/// What global setup established. Informational only; the suite proceeds
/// on every variant and dependent fixtures fail locally and visibly when
/// the snapshot turned out unauthenticated.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupOutcome {
    /// Login succeeded and an authenticated snapshot was persisted.
    Authenticated { snapshot_digest: String },

    /// The application kept us on the login surface. An unauthenticated
    /// snapshot was persisted so downstream fixtures have a file to load.
    LoginRejected { error: Option<String> },

    /// Something failed outright (driver spawn, navigation, I/O). An empty
    /// snapshot was persisted; fixtures will handle authentication.
    Degraded { reason: String },
}

/// One-time suite precondition: authenticate the admin user and persist
/// the browsing context's session snapshot.
pub struct GlobalSetup;

impl GlobalSetup {
    /// Runs exactly once before any test worker starts.
    ///
    /// Never returns an error: whatever happens, a snapshot file exists at
    /// `config.snapshot_path` afterwards and the outcome is in the run log.
    pub fn run(config: &SuiteConfig, provider: &CredentialProvider, log: &RunLogger) -> SetupOutcome {
        log.log(&RunEvent::SetupStarted {
            base_url: config.base_url.clone(),
        });

        // Released on every exit path, panic unwinds included: if nothing
        // below persisted a snapshot, write an empty one so downstream
        // fixtures always have a file to load.
        let mut scope = FixtureScope::new();
        let snapshot_path = config.snapshot_path.clone();
        scope.defer(move || {
            let path = Path::new(&snapshot_path);
            if !path.exists() {
                let _ = SessionSnapshot::empty().save(path);
            }
        });

        match Self::attempt(config, provider, log) {
            Ok(outcome) => outcome,
            Err(e) => {
                let reason = e.to_string();
                persist_best_effort(config, &SessionSnapshot::empty());
                log.log(&RunEvent::SetupDegraded {
                    username: provider.get("admin").map(|c| c.username.clone()),
                    reason: reason.clone(),
                });
                eprintln!(
                    "Global setup failed ({}); fixtures will handle authentication",
                    reason
                );
                SetupOutcome::Degraded { reason }
            }
        }
    }

    fn attempt(
        config: &SuiteConfig,
        provider: &CredentialProvider,
        log: &RunLogger,
    ) -> Result<SetupOutcome, SuiteError> {
        let admin = provider.admin()?.clone();

        let mut driver = PageDriver::launch(&launch_options(config, None))?;

        let mut page = LoginPage::new(&mut driver, config);
        page.open()?;
        page.login(&admin)?;

        if page.is_displayed()? {
            // Still on the login surface: rejected. Read the visible error
            // for diagnostics and persist whatever state the context holds.
            let error = page.validation_error()?;
            let snapshot = dump_or_empty(&mut driver);
            persist_best_effort(config, &snapshot);
            log.log(&RunEvent::SetupLoginRejected {
                username: admin.username.clone(),
                error: error.clone(),
            });
            eprintln!(
                "Global setup: login rejected for '{}'; persisted unauthenticated snapshot",
                admin.username
            );
            return Ok(SetupOutcome::LoginRejected { error });
        }

        let snapshot = SessionSnapshot::from_value(driver.storage_state()?)?;
        snapshot.save(Path::new(&config.snapshot_path))?;
        let snapshot_digest = snapshot.digest();
        log.log(&RunEvent::SetupAuthenticated {
            username: admin.username.clone(),
            snapshot_digest: snapshot_digest.clone(),
        });

        Ok(SetupOutcome::Authenticated { snapshot_digest })
    }
}

/// Dump the context state, falling back to an empty snapshot when the
/// context can no longer be queried.
fn dump_or_empty(driver: &mut PageDriver) -> SessionSnapshot {
    driver
        .storage_state()
        .ok()
        .and_then(|state| SessionSnapshot::from_value(state).ok())
        .unwrap_or_else(SessionSnapshot::empty)
}

/// Persist without propagating: even a failed write must not abort setup.
fn persist_best_effort(config: &SuiteConfig, snapshot: &SessionSnapshot) {
    if let Err(e) = snapshot.save(Path::new(&config.snapshot_path)) {
        eprintln!(
            "Warning: could not persist session snapshot to '{}': {}",
            config.snapshot_path, e
        );
    }
}
