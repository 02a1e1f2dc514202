//! Suite runner
//!
//! Drives one run: for each declared test case, in declaration order,
//! build the outgoing request, execute it through the [`HttpClient`]
//! port, validate the observed exchange, and fold everything into a
//! [`RunReport`]. Test cases execute strictly sequentially; the variable
//! map is read-only for the whole run.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use restcheck_domain::{
    AuthError, RequestSpec, ResolvedRequest, RunReport, TestCase, TestPlan, TestResult,
};

use crate::matching::MatchOptions;
use crate::ports::HttpClient;
use crate::substitution::substitute;
use crate::validation::ValidationPipeline;

/// Builds the outgoing request for one test case: substitutes variables
/// into the URL and header values (never the body) and resolves the
/// authentication declaration.
///
/// # Errors
///
/// Returns [`AuthError`] when the declared credentials are incomplete.
/// The caller fails the test case without sending anything.
pub fn resolve_request(
    spec: &RequestSpec,
    vars: &BTreeMap<String, String>,
    timeout_ms: Option<u64>,
) -> Result<ResolvedRequest, AuthError> {
    let url = substitute(&spec.url, vars);
    let headers = spec
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), substitute(value, vars)))
        .collect();
    let auth = spec.auth.as_ref().map(|a| a.resolve()).transpose()?;

    Ok(ResolvedRequest {
        method: spec.method,
        url,
        headers,
        body: spec.body.clone(),
        auth,
        timeout_ms,
    })
}

/// Executes a test plan sequentially against an HTTP client.
pub struct SuiteRunner<C: HttpClient> {
    client: Arc<C>,
    pipeline: ValidationPipeline,
    timeout_ms: Option<u64>,
}

impl<C: HttpClient> SuiteRunner<C> {
    /// Creates a runner with the standard validation pipeline and no
    /// request timeout.
    #[must_use]
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            pipeline: ValidationPipeline::new(),
            timeout_ms: None,
        }
    }

    /// Sets the body-matching options (builder pattern).
    #[must_use]
    pub fn with_match_options(mut self, options: MatchOptions) -> Self {
        self.pipeline = ValidationPipeline::with_match_options(options);
        self
    }

    /// Sets a per-request timeout in milliseconds (builder pattern).
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Runs every test case in declaration order and collects the
    /// results. A transport failure fails its test case; the run always
    /// continues to the next one.
    pub async fn run(&self, plan: &TestPlan) -> RunReport {
        let mut results = Vec::with_capacity(plan.tests.len());
        for case in &plan.tests {
            results.push(self.run_case(case, &plan.variables).await);
        }
        RunReport::from_results(results)
    }

    /// Executes and validates a single test case.
    pub async fn run_case(
        &self,
        case: &TestCase,
        vars: &BTreeMap<String, String>,
    ) -> TestResult {
        let request = match resolve_request(&case.request, vars, self.timeout_ms) {
            Ok(request) => request,
            Err(e) => {
                // Setup failure: nothing was sent.
                return TestResult::exchange_failed(
                    &case.name,
                    case.expect.status_code,
                    0,
                    e.to_string(),
                );
            }
        };

        let started = Instant::now();
        match self.client.execute(&request).await {
            Ok(response) => {
                let verdict = self.pipeline.validate(&response, &case.expect);
                if verdict.passed {
                    TestResult::passed(
                        &case.name,
                        response.status,
                        case.expect.status_code,
                        response.duration_ms(),
                        response.body,
                    )
                } else {
                    TestResult::failed(
                        &case.name,
                        response.status,
                        case.expect.status_code,
                        response.duration_ms(),
                        response.body,
                        verdict.reasons,
                    )
                }
            }
            Err(e) => {
                let elapsed_ms =
                    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                TestResult::exchange_failed(
                    &case.name,
                    case.expect.status_code,
                    elapsed_ms,
                    e.to_string(),
                )
            }
        }
    }
}
