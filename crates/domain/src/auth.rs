//! Authentication configuration types
//!
//! A test case declares at most one authentication scheme. The scheme is a
//! tagged union decided directly by the `type` field of the declaration,
//! so dispatch is unambiguous by construction. `AuthConfig::resolve`
//! validates the declared credentials and produces the concrete request
//! decoration to apply.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication declaration for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthConfig {
    /// HTTP Basic authentication
    Basic {
        /// Username (sent base64-encoded together with the password)
        username: String,
        /// Password
        password: String,
    },
    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },
    /// API key authentication
    ApiKey {
        /// Header or query parameter name (e.g., "X-API-Key")
        name: String,
        /// The API key value
        value: String,
        /// Where to place the key
        #[serde(rename = "in", default)]
        location: ApiKeyLocation,
    },
}

/// Location for API key authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    /// Add to request headers
    #[default]
    Header,
    /// Add to query parameters
    Query,
}

/// Concrete decoration produced by resolving an [`AuthConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResolution {
    /// Set this header, overwriting any existing value.
    Header {
        /// Header name (e.g., "Authorization").
        name: String,
        /// Header value (e.g., "Bearer token123").
        value: String,
    },
    /// Add this header without displacing a same-named header.
    AppendHeader {
        /// Header name.
        name: String,
        /// Header value.
        value: String,
    },
    /// Set this query parameter, overwriting a same-named parameter and
    /// preserving all others.
    QueryParam {
        /// Query parameter name.
        name: String,
        /// Query parameter value.
        value: String,
    },
}

/// Authentication declaration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A required credential field is empty.
    #[error("{scheme} auth requires a non-empty {field}")]
    MissingField {
        /// The declared scheme ("basic", "bearer", "apikey").
        scheme: &'static str,
        /// The empty field.
        field: &'static str,
    },
}

impl AuthConfig {
    /// Creates a basic authentication declaration.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a bearer token declaration.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Creates an API key declaration placed in a header.
    #[must_use]
    pub fn api_key_header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            name: name.into(),
            value: value.into(),
            location: ApiKeyLocation::Header,
        }
    }

    /// Creates an API key declaration placed in the query string.
    #[must_use]
    pub fn api_key_query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            name: name.into(),
            value: value.into(),
            location: ApiKeyLocation::Query,
        }
    }

    /// Resolves the declaration into the decoration to apply to the
    /// outgoing request.
    ///
    /// Basic and bearer credentials own the `Authorization` header and
    /// overwrite any existing value; a header-placed API key is additive.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingField`] when a required credential
    /// field is empty. Callers treat this as a test-case setup failure;
    /// the request is never sent unauthenticated by accident.
    pub fn resolve(&self) -> Result<AuthResolution, AuthError> {
        match self {
            Self::Basic { username, password } => {
                require("basic", "username", username)?;
                require("basic", "password", password)?;
                let credentials = BASE64.encode(format!("{username}:{password}"));
                Ok(AuthResolution::Header {
                    name: "Authorization".to_string(),
                    value: format!("Basic {credentials}"),
                })
            }
            Self::Bearer { token } => {
                require("bearer", "token", token)?;
                Ok(AuthResolution::Header {
                    name: "Authorization".to_string(),
                    value: format!("Bearer {token}"),
                })
            }
            Self::ApiKey {
                name,
                value,
                location,
            } => {
                require("apikey", "name", name)?;
                require("apikey", "value", value)?;
                Ok(match location {
                    ApiKeyLocation::Header => AuthResolution::AppendHeader {
                        name: name.clone(),
                        value: value.clone(),
                    },
                    ApiKeyLocation::Query => AuthResolution::QueryParam {
                        name: name.clone(),
                        value: value.clone(),
                    },
                })
            }
        }
    }
}

fn require(scheme: &'static str, field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::MissingField { scheme, field });
    }
    Ok(())
}
