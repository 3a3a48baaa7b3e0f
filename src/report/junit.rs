use crate::report::report_model::SuiteReport;

// ============================================================================
// JUnit XML reporter, for CI result ingestion
// ============================================================================

/// Generate a JUnit XML report for CI systems (Jenkins, GitHub Actions,
/// GitLab CI).
///
/// Produces standard JUnit XML:
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuite name="petstore-e2e" tests="2" failures="1" time="4.600">
///   <testcase name="home shows title when authenticated" classname="petstore-e2e" time="1.200" />
///   <testcase name="short name blocks submission" classname="petstore-e2e" time="3.400">
///     <failure message="case failed" type="TestFailure">Assertion failed: ...</failure>
///   </testcase>
/// </testsuite>
/// ```
pub fn generate_junit_xml(report: &SuiteReport) -> String {
    let time_attr = report
        .duration_ms
        .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
        .unwrap_or_default();

    let mut cases = String::new();
    for result in &report.results {
        let case_time = format!(" time=\"{:.3}\"", result.duration_ms as f64 / 1000.0);
        if result.passed {
            cases.push_str(&format!(
                "  <testcase name=\"{}\" classname=\"petstore-e2e\"{} />\n",
                escape_xml(&result.name),
                case_time
            ));
        } else {
            let body = result.error.as_deref().unwrap_or("case failed");
            cases.push_str(&format!(
                "  <testcase name=\"{name}\" classname=\"petstore-e2e\"{time}>\n    <failure message=\"case failed\" type=\"TestFailure\">{body}</failure>\n  </testcase>\n",
                name = escape_xml(&result.name),
                time = case_time,
                body = escape_xml(body),
            ));
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\"{time}>\n{cases}</testsuite>\n",
        name = escape_xml(&report.suite_name),
        tests = report.total,
        failures = report.failed,
        time = time_attr,
        cases = cases,
    )
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
