//! HTTP Client port

use std::future::Future;

use restcheck_domain::{ResolvedRequest, ResponseSpec};
use thiserror::Error;

/// Transport-level failure of one HTTP exchange.
///
/// A transport failure is local to its test case: it produces a failed
/// result carrying the error text and the run continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The exchange exceeded the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// The host that failed to resolve.
        host: String,
        /// The underlying error text.
        message: String,
    },

    /// The target refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// TLS negotiation failed.
    #[error("TLS error: {0}")]
    TlsError(String),

    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value was rejected by the HTTP stack.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The request body could not be serialized.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// engine to be independent of specific HTTP libraries (and to be tested
/// without a network).
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the observed response.
    ///
    /// Implementations measure elapsed time from just before send to
    /// just after the full response body is received.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpClientError`] if the exchange itself fails
    /// (connection refused, timeout, DNS failure, TLS failure).
    fn execute(
        &self,
        request: &ResolvedRequest,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
