//! Test plan and test case declarations
//!
//! A `TestPlan` is the deserialized form of one specification file: a
//! shared variable map plus an ordered list of test cases. The plan is
//! immutable for the duration of a run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::expect::Expect;
use crate::request::RequestSpec;

/// One declared request + expectation pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Test case name, used for reporting.
    pub name: String,
    /// The request to send.
    pub request: RequestSpec,
    /// What the response must look like. Defaults to "status 200".
    #[serde(default)]
    pub expect: Expect,
}

impl TestCase {
    /// Creates a test case with a default expectation (status 200).
    #[must_use]
    pub fn new(name: impl Into<String>, request: RequestSpec) -> Self {
        Self {
            name: name.into(),
            request,
            expect: Expect::default(),
        }
    }

    /// Sets the expectation (builder pattern).
    #[must_use]
    pub fn with_expect(mut self, expect: Expect) -> Self {
        self.expect = expect;
        self
    }
}

/// An ordered collection of test cases with a shared variable map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlan {
    /// Variables substituted into URLs and header values. Read-only for
    /// the whole run.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    /// Test cases, executed in declaration order.
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

impl TestPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a test case (builder pattern).
    #[must_use]
    pub fn with_test(mut self, test: TestCase) -> Self {
        self.tests.push(test);
        self
    }

    /// Returns the number of declared test cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true if the plan declares no test cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_builder() {
        let plan = TestPlan::new()
            .with_test(TestCase::new("first", RequestSpec::get("https://a")))
            .with_test(TestCase::new("second", RequestSpec::get("https://b")));
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.tests[0].name, "first");
    }

    #[test]
    fn test_deserialize_plan() {
        let plan: TestPlan = serde_json::from_str(
            r#"{
                "variables": {"baseUrl": "https://api.example.com"},
                "tests": [
                    {"name": "status", "request": {"url": "{{baseUrl}}/status"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            plan.variables.get("baseUrl").map(String::as_str),
            Some("https://api.example.com")
        );
        assert_eq!(plan.tests.len(), 1);
        assert_eq!(plan.tests[0].expect.status_code, 200);
    }

    #[test]
    fn test_deserialize_without_variables() {
        let plan: TestPlan = serde_json::from_str(r#"{"tests": []}"#).unwrap();
        assert!(plan.variables.is_empty());
        assert!(plan.is_empty());
    }
}
