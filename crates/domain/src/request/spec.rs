//! Declared request specification
//!
//! `RequestSpec` is the request half of a test case exactly as it appears
//! in a specification file: URL and header values may still contain
//! `{{variable}}` placeholders, and authentication is still a declaration
//! rather than concrete credentials on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::auth::AuthConfig;
use crate::request::HttpMethod;

/// A declared HTTP request, prior to variable substitution and building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSpec {
    /// HTTP method, defaults to GET.
    #[serde(default)]
    pub method: HttpMethod,

    /// Target URL; may contain `{{variable}}` placeholders.
    pub url: String,

    /// Request headers; values may contain `{{variable}}` placeholders.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// Optional structured body, serialized to JSON at send time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,

    /// Optional authentication declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

impl RequestSpec {
    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
            auth: None,
        }
    }

    /// Creates a request with the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
            auth: None,
        }
    }

    /// Adds a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the authentication declaration (builder pattern).
    #[must_use]
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = Some(auth);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_constructor() {
        let spec = RequestSpec::get("https://api.example.com/status");
        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(spec.url, "https://api.example.com/status");
        assert!(spec.headers.is_empty());
        assert!(spec.body.is_none());
        assert!(spec.auth.is_none());
    }

    #[test]
    fn test_deserialize_defaults() {
        let spec: RequestSpec =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert_eq!(spec.method, HttpMethod::Get);
        assert!(spec.headers.is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let spec: RequestSpec = serde_json::from_str(
            r#"{
                "method": "POST",
                "url": "https://example.com/users",
                "headers": {"X-Trace": "abc"},
                "body": {"name": "Ann"},
                "auth": {"type": "bearer", "token": "t0"}
            }"#,
        )
        .unwrap();
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.headers.get("X-Trace").map(String::as_str), Some("abc"));
        assert_eq!(spec.body, Some(serde_json::json!({"name": "Ann"})));
        assert!(spec.auth.is_some());
    }
}
