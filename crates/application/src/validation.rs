//! Validation pipeline
//!
//! Runs an ordered set of independent validators against one executed
//! exchange and aggregates them into a verdict. Each validator checks a
//! single criterion and is skipped (passes) when its expectation is
//! absent. The overall verdict is the logical AND of all validators;
//! `reasons` lists the tags of the failed ones in pipeline order so that
//! messages are reproducible.

use restcheck_domain::{Expect, ResponseSpec};

use crate::matching::{MatchOptions, matches_with};

/// One independent criterion over an executed exchange.
pub trait Validator: Send + Sync {
    /// Short human-readable tag used in failure reasons.
    fn tag(&self) -> &'static str;

    /// Returns true if the criterion holds (or does not apply).
    fn validate(&self, response: &ResponseSpec, expect: &Expect) -> bool;
}

/// Checks the observed status code against the expected one.
#[derive(Debug, Default)]
pub struct StatusCodeValidator;

impl Validator for StatusCodeValidator {
    fn tag(&self) -> &'static str {
        "Status code mismatch"
    }

    fn validate(&self, response: &ResponseSpec, expect: &Expect) -> bool {
        response.status == expect.status_code
    }
}

/// Checks the response body against the expected JSON subset.
#[derive(Debug, Default)]
pub struct BodyValidator {
    options: MatchOptions,
}

impl BodyValidator {
    /// Creates a body validator with the given match options.
    #[must_use]
    pub const fn new(options: MatchOptions) -> Self {
        Self { options }
    }
}

impl Validator for BodyValidator {
    fn tag(&self) -> &'static str {
        "Body mismatch"
    }

    fn validate(&self, response: &ResponseSpec, expect: &Expect) -> bool {
        let Some(expected) = &expect.body else {
            return true;
        };
        // An unparseable actual body is a mismatch, not a crash.
        let Some(actual) = response.body_as_json() else {
            return false;
        };
        matches_with(expected, &actual, self.options)
    }
}

/// Checks that each declared header is present with a value containing
/// the declared value. Header names are case-insensitive.
#[derive(Debug, Default)]
pub struct HeaderValidator;

impl Validator for HeaderValidator {
    fn tag(&self) -> &'static str {
        "Header mismatch"
    }

    fn validate(&self, response: &ResponseSpec, expect: &Expect) -> bool {
        let Some(expected_headers) = &expect.headers else {
            return true;
        };
        expected_headers.iter().all(|(name, expected_value)| {
            response
                .get_header(name)
                .is_some_and(|actual_value| actual_value.contains(expected_value.as_str()))
        })
    }
}

/// Checks the elapsed time against the declared upper bound.
#[derive(Debug, Default)]
pub struct ResponseTimeValidator;

impl Validator for ResponseTimeValidator {
    fn tag(&self) -> &'static str {
        "Response time exceeded"
    }

    fn validate(&self, response: &ResponseSpec, expect: &Expect) -> bool {
        let Some(max_ms) = expect.max_response_time_ms else {
            return true;
        };
        response.duration_ms() <= max_ms
    }
}

/// The aggregated outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Logical AND of all validators.
    pub passed: bool,
    /// Tags of the failed validators, in pipeline order.
    pub reasons: Vec<String>,
}

/// Runs all validators against one exchange in a fixed order
/// (status, body, headers, time).
pub struct ValidationPipeline {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationPipeline {
    /// Creates the standard pipeline with default (case-sensitive) body
    /// matching.
    #[must_use]
    pub fn new() -> Self {
        Self::with_match_options(MatchOptions::default())
    }

    /// Creates the standard pipeline with the given body match options.
    #[must_use]
    pub fn with_match_options(options: MatchOptions) -> Self {
        Self {
            validators: vec![
                Box::new(StatusCodeValidator),
                Box::new(BodyValidator::new(options)),
                Box::new(HeaderValidator),
                Box::new(ResponseTimeValidator),
            ],
        }
    }

    /// Validates one exchange. Pure and idempotent: the same inputs
    /// always produce the same verdict.
    #[must_use]
    pub fn validate(&self, response: &ResponseSpec, expect: &Expect) -> Verdict {
        let mut reasons = Vec::new();
        for validator in &self.validators {
            if !validator.validate(response, expect) {
                reasons.push(validator.tag().to_string());
            }
        }
        Verdict {
            passed: reasons.is_empty(),
            reasons,
        }
    }
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};
    use std::time::Duration;

    fn response(status: u16, body: &str, duration_ms: u64) -> ResponseSpec {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        ResponseSpec::new(
            status,
            headers,
            body.as_bytes().to_vec(),
            Duration::from_millis(duration_ms),
        )
    }

    #[test]
    fn test_all_pass_with_default_expect() {
        let pipeline = ValidationPipeline::new();
        let verdict = pipeline.validate(&response(200, r#"{"ok":true}"#, 10), &Expect::default());
        assert!(verdict.passed);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn test_status_mismatch() {
        let pipeline = ValidationPipeline::new();
        let verdict = pipeline.validate(&response(404, "", 10), &Expect::default());
        assert!(!verdict.passed);
        assert_eq!(verdict.reasons, vec!["Status code mismatch"]);
    }

    #[test]
    fn test_body_subset_passes() {
        let pipeline = ValidationPipeline::new();
        let expect = Expect::default().with_body(json!({"user": {"id": 1}}));
        let verdict = pipeline.validate(
            &response(200, r#"{"user":{"id":1,"name":"Ann"},"meta":{}}"#, 10),
            &expect,
        );
        assert!(verdict.passed);
    }

    #[test]
    fn test_unparseable_body_fails_body_validator() {
        let pipeline = ValidationPipeline::new();
        let expect = Expect::default().with_body(json!({"ok": true}));
        let verdict = pipeline.validate(&response(200, "not json", 10), &expect);
        assert!(!verdict.passed);
        assert_eq!(verdict.reasons, vec!["Body mismatch"]);
    }

    #[test]
    fn test_absent_body_expectation_skips() {
        let pipeline = ValidationPipeline::new();
        let verdict = pipeline.validate(&response(200, "not json", 10), &Expect::default());
        assert!(verdict.passed);
    }

    #[test]
    fn test_header_present_and_contains() {
        let pipeline = ValidationPipeline::new();
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let expect = Expect {
            headers: Some(headers),
            ..Expect::default()
        };
        let verdict = pipeline.validate(&response(200, "{}", 10), &expect);
        assert!(verdict.passed);
    }

    #[test]
    fn test_header_missing_fails() {
        let pipeline = ValidationPipeline::new();
        let mut headers = BTreeMap::new();
        headers.insert("X-Request-Id".to_string(), "abc".to_string());
        let expect = Expect {
            headers: Some(headers),
            ..Expect::default()
        };
        let verdict = pipeline.validate(&response(200, "{}", 10), &expect);
        assert!(!verdict.passed);
        assert_eq!(verdict.reasons, vec!["Header mismatch"]);
    }

    #[test]
    fn test_latency_bound() {
        let pipeline = ValidationPipeline::new();
        let expect = Expect::default().with_max_response_time_ms(100);

        let verdict = pipeline.validate(&response(200, "", 150), &expect);
        assert!(!verdict.passed);
        assert_eq!(verdict.reasons, vec!["Response time exceeded"]);

        let verdict = pipeline.validate(&response(200, "", 100), &expect);
        assert!(verdict.passed);
    }

    #[test]
    fn test_reason_order_is_fixed() {
        let pipeline = ValidationPipeline::new();
        let expect = Expect::status(201)
            .with_body(json!({"missing": 1}))
            .with_max_response_time_ms(5);
        let verdict = pipeline.validate(&response(200, "{}", 50), &expect);
        assert_eq!(
            verdict.reasons,
            vec![
                "Status code mismatch",
                "Body mismatch",
                "Response time exceeded"
            ]
        );
    }

    #[test]
    fn test_idempotence() {
        let pipeline = ValidationPipeline::new();
        let resp = response(500, "oops", 40);
        let expect = Expect::default().with_body(json!({"ok": true}));
        let first = pipeline.validate(&resp, &expect);
        let second = pipeline.validate(&resp, &expect);
        assert_eq!(first, second);
    }
}
