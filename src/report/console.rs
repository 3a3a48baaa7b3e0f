use crate::report::report_model::SuiteReport;

// ============================================================================
// Console reporter
// ============================================================================

/// Format a suite report for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Suite: petstore-e2e ===
///
/// ✓ PASS  home shows title when authenticated (1.2s)
/// ✗ FAIL  short name blocks submission (3.4s)
///     [FAIL] Assertion failed: submit control is enabled for a too-short name
///
/// === Results: 1 passed, 1 failed (2 total) in 4.6s ===
/// ```
pub fn format_console_report(report: &SuiteReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Test Suite: {} ===\n\n", report.suite_name));

    for result in &report.results {
        let marker = if result.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} ({:.1}s)\n",
            marker,
            result.name,
            result.duration_ms as f64 / 1000.0
        ));

        if let Some(ref error) = result.error {
            out.push_str(&format!("    [FAIL] {}\n", error));
        }
    }

    // Summary line
    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total)",
        report.passed, report.failed, report.total
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}
