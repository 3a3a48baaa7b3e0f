use std::path::Path;

use crate::cli::config::SuiteConfig;
use crate::data::provider::CredentialProvider;
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::session::global_setup::{GlobalSetup, SetupOutcome};
use crate::suite::registry::cases_with_tag;
use crate::suite::runner::SuiteRunner;
use crate::trace::logger::RunLogger;

// ============================================================================
// run subcommand
// ============================================================================

/// Run the suite and return whether everything passed.
pub fn cmd_run(
    config: &SuiteConfig,
    tag: Option<&str>,
    format: &str,
    output: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let cases = cases_with_tag(tag);
    if cases.is_empty() {
        eprintln!("No scenarios match tag: {}", tag.unwrap_or("<none>"));
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!(
            "Running {} scenarios against {} ({} workers)...",
            cases.len(),
            config.base_url,
            config.workers
        );
    }

    let provider = CredentialProvider::from_file(Path::new(&config.users_fixture))?;
    let log = RunLogger::new(&config.run_log);

    let report = SuiteRunner::run(config, &provider, cases, &log, verbose);
    let all_passed = report.all_passed();

    let output_content = match format {
        "junit" => generate_junit_xml(&report),
        _ => format_console_report(&report),
    };

    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

// ============================================================================
// setup subcommand
// ============================================================================

/// Run global setup alone, printing the outcome. Exits successfully on
/// every outcome; a degraded setup is reported, not treated as a failed run.
pub fn cmd_setup(config: &SuiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let provider = CredentialProvider::from_file(Path::new(&config.users_fixture))?;
    let log = RunLogger::new(&config.run_log);

    match GlobalSetup::run(config, &provider, &log) {
        SetupOutcome::Authenticated { snapshot_digest } => {
            println!(
                "Authenticated; snapshot written to {} (digest {})",
                config.snapshot_path, snapshot_digest
            );
        }
        SetupOutcome::LoginRejected { error } => {
            println!(
                "Login rejected ({}); unauthenticated snapshot written to {}",
                error.as_deref().unwrap_or("no visible error"),
                config.snapshot_path
            );
        }
        SetupOutcome::Degraded { reason } => {
            println!(
                "Setup degraded ({}); empty snapshot written to {}",
                reason, config.snapshot_path
            );
        }
    }

    Ok(())
}

// ============================================================================
// list subcommand
// ============================================================================

pub fn cmd_list() {
    for case in cases_with_tag(None) {
        println!("{}  [{}]", case.name, case.tags.join(", "));
    }
}
