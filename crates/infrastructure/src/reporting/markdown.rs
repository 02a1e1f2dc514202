//! Markdown report rendering

use restcheck_domain::RunReport;

/// Renders the run as a Markdown table, one row per test in declaration
/// order.
#[must_use]
pub fn render_markdown(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str("| Test | Status | Time (ms) | Passed |\n");
    out.push_str("|------|--------|-----------|--------|\n");
    for result in &report.results {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            result.test_name,
            result.status_code,
            result.response_time_ms,
            if result.passed { "yes" } else { "no" }
        ));
    }
    out.push_str(&format!(
        "\n**{} passed, {} failed** ({} total)\n",
        report.passed, report.failed, report.total
    ));
    out
}
