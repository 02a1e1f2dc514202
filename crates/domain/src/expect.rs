//! Response expectations
//!
//! The expectation half of a test case: which observations of the HTTP
//! exchange must hold for the test to pass. Every field except the status
//! code is optional; absent criteria are skipped by the validation
//! pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Expected properties of the response to one test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expect {
    /// Expected HTTP status code, defaults to 200.
    #[serde(default = "default_status_code")]
    pub status_code: u16,

    /// Optional body expectation, compared as a structural subset of the
    /// actual JSON body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,

    /// Optional headers that must be present; each declared value must be
    /// contained in the actual header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    /// Optional upper bound on the response time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_response_time_ms: Option<u64>,
}

const fn default_status_code() -> u16 {
    200
}

impl Default for Expect {
    fn default() -> Self {
        Self {
            status_code: default_status_code(),
            body: None,
            headers: None,
            max_response_time_ms: None,
        }
    }
}

impl Expect {
    /// Creates an expectation for the given status code and nothing else.
    #[must_use]
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    /// Sets the body expectation (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the latency bound (builder pattern).
    #[must_use]
    pub const fn with_max_response_time_ms(mut self, max_ms: u64) -> Self {
        self.max_response_time_ms = Some(max_ms);
        self
    }
}
