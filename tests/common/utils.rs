use std::path::Path;

use petstore_e2e::cli::config::SuiteConfig;

/// A default config whose artifact paths all live under `dir`, so tests
/// never touch the repository's real snapshot or run log.
pub fn temp_config(dir: &Path) -> SuiteConfig {
    let mut config = SuiteConfig::default();
    config.snapshot_path = dir.join("auth-state.json").display().to_string();
    config.run_log = dir.join("run.jsonl").display().to_string();
    config
}
