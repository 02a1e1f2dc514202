//! Per-test verdicts and run-level aggregation
//!
//! One [`TestResult`] is produced per test case per run and is never
//! mutated after validation completes. [`RunReport`] collects the results
//! in declaration order; it is a pure data transformation with no I/O.

use serde::{Deserialize, Serialize};

/// The verdict for one executed test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Name of the test case.
    pub test_name: String,
    /// Overall pass/fail verdict.
    pub passed: bool,
    /// Observed status code; 0 when the exchange itself failed.
    pub status_code: u16,
    /// The status code the test expected.
    pub expected_status_code: u16,
    /// Elapsed time of the exchange in milliseconds.
    pub response_time_ms: u64,
    /// Raw response body text; empty on transport failure.
    #[serde(default)]
    pub response_body: String,
    /// Set only when the exchange itself failed (DNS, connect, timeout,
    /// or an invalid setup such as incomplete credentials).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable verdict summary.
    pub message: String,
    /// Tags of the validators that failed, in pipeline order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

impl TestResult {
    /// Creates a passing result.
    #[must_use]
    pub fn passed(
        test_name: impl Into<String>,
        status_code: u16,
        expected_status_code: u16,
        response_time_ms: u64,
        response_body: impl Into<String>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            passed: true,
            status_code,
            expected_status_code,
            response_time_ms,
            response_body: response_body.into(),
            error: None,
            message: "passed".to_string(),
            failures: Vec::new(),
        }
    }

    /// Creates a failing result from an executed exchange whose
    /// validation did not hold. `failures` lists the failed criteria in
    /// pipeline order.
    #[must_use]
    pub fn failed(
        test_name: impl Into<String>,
        status_code: u16,
        expected_status_code: u16,
        response_time_ms: u64,
        response_body: impl Into<String>,
        failures: Vec<String>,
    ) -> Self {
        let message = if failures.is_empty() {
            "failed".to_string()
        } else {
            format!("failed: {}", failures.join(", "))
        };
        Self {
            test_name: test_name.into(),
            passed: false,
            status_code,
            expected_status_code,
            response_time_ms,
            response_body: response_body.into(),
            error: None,
            message,
            failures,
        }
    }

    /// Creates a failing result for an exchange that never produced a
    /// response (transport failure, or a setup failure such as incomplete
    /// credentials). The status code is 0 and the body is empty.
    #[must_use]
    pub fn exchange_failed(
        test_name: impl Into<String>,
        expected_status_code: u16,
        response_time_ms: u64,
        error: impl Into<String>,
    ) -> Self {
        let error = error.into();
        Self {
            test_name: test_name.into(),
            passed: false,
            status_code: 0,
            expected_status_code,
            response_time_ms,
            response_body: String::new(),
            message: format!("error: {error}"),
            error: Some(error),
            failures: Vec::new(),
        }
    }

    /// Returns true if the exchange itself failed (as opposed to a
    /// validation mismatch).
    #[must_use]
    pub const fn is_exchange_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Results of one whole run, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Individual test results, preserving input order.
    pub results: Vec<TestResult>,
    /// Total number of test cases.
    pub total: usize,
    /// Number of passing test cases.
    pub passed: usize,
    /// Number of failing test cases.
    pub failed: usize,
}

impl RunReport {
    /// Collects per-test results into a report. No sorting, filtering,
    /// or deduplication.
    #[must_use]
    pub fn from_results(results: Vec<TestResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            results,
            total,
            passed,
            failed,
        }
    }

    /// Returns true if every test case passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Pass rate as a percentage.
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let rate = (self.passed as f64 / self.total as f64) * 100.0;
            rate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exchange_failure_invariant() {
        let result = TestResult::exchange_failed("t", 200, 12, "connection refused");
        assert!(!result.passed);
        assert_eq!(result.status_code, 0);
        assert!(result.response_body.is_empty());
        assert!(result.is_exchange_failure());
        assert_eq!(result.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_failed_message_lists_criteria() {
        let result = TestResult::failed(
            "t",
            404,
            200,
            5,
            "{}",
            vec!["Status code mismatch".to_string(), "Body mismatch".to_string()],
        );
        assert_eq!(result.message, "failed: Status code mismatch, Body mismatch");
        assert!(!result.is_exchange_failure());
    }

    #[test]
    fn test_report_counters() {
        let report = RunReport::from_results(vec![
            TestResult::passed("a", 200, 200, 10, "{}"),
            TestResult::failed("b", 500, 200, 10, "", vec!["Status code mismatch".to_string()]),
            TestResult::exchange_failed("c", 200, 3, "dns failure"),
        ]);
        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 2);
        assert!(!report.all_passed());
        assert!((report.pass_rate() - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_report_preserves_order() {
        let report = RunReport::from_results(vec![
            TestResult::passed("z", 200, 200, 1, ""),
            TestResult::passed("a", 200, 200, 1, ""),
        ]);
        let names: Vec<_> = report.results.iter().map(|r| r.test_name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_empty_report() {
        let report = RunReport::from_results(vec![]);
        assert!(report.all_passed());
        assert!((report.pass_rate() - 100.0).abs() < f64::EPSILON);
    }
}
