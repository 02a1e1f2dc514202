//! HTML report rendering

use restcheck_domain::RunReport;

/// Renders the run as a minimal standalone HTML table.
#[must_use]
pub fn render_html(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str("<table border=\"1\">\n");
    out.push_str("<tr><th>Test</th><th>Status</th><th>Time (ms)</th><th>Passed</th></tr>\n");
    for result in &report.results {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&result.test_name),
            result.status_code,
            result.response_time_ms,
            if result.passed { "yes" } else { "no" }
        ));
    }
    out.push_str("</table>\n");
    out.push_str(&format!(
        "<p>{} passed, {} failed ({} total)</p>\n",
        report.passed, report.failed, report.total
    ));
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use restcheck_domain::TestResult;

    #[test]
    fn test_rows_and_summary() {
        let report = RunReport::from_results(vec![TestResult::passed("ok", 200, 200, 7, "")]);
        let output = render_html(&report);
        assert!(output.contains("<tr><td>ok</td><td>200</td><td>7</td><td>yes</td></tr>"));
        assert!(output.contains("<p>1 passed, 0 failed (1 total)</p>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let report =
            RunReport::from_results(vec![TestResult::passed("<script>", 200, 200, 1, "")]);
        let output = render_html(&report);
        assert!(output.contains("&lt;script&gt;"));
        assert!(!output.contains("<script>"));
    }
}
