//! Resolved outgoing request
//!
//! The output of the request-building step: variables substituted,
//! authentication resolved to a concrete decoration. This is what the
//! HTTP executor actually sends.

use std::collections::BTreeMap;

use crate::auth::AuthResolution;
use crate::request::HttpMethod;

/// A fully built outgoing request, ready for the HTTP executor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL with all variables substituted.
    pub url: String,
    /// Header names to substituted values, attached as-is.
    pub headers: BTreeMap<String, String>,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
    /// Resolved authentication decoration, if any.
    pub auth: Option<AuthResolution>,
    /// Optional per-request timeout in milliseconds. `None` means the
    /// exchange may wait indefinitely.
    pub timeout_ms: Option<u64>,
}

impl ResolvedRequest {
    /// Creates a resolved GET request with no headers, body, or auth.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
            auth: None,
            timeout_ms: None,
        }
    }
}
