//! HTTP executor implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port. One `reqwest::Client`
//! (and its connection pool) lives for the whole run and is reused across
//! the strictly sequential exchanges.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use restcheck_application::ports::{HttpClient, HttpClientError};
use restcheck_domain::{AuthResolution, HttpMethod, ResolvedRequest, ResponseSpec};
use url::Url;

/// HTTP client implementation using reqwest.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client.
    ///
    /// The client follows up to 10 redirects and has no overall timeout;
    /// per-request timeouts come from the resolved request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("restcheck/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a client wrapping a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts the domain `HttpMethod` to the reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Parses the request URL and applies a query-placed API key, if any.
    ///
    /// A same-named existing parameter is overwritten; all other
    /// parameters are preserved.
    fn build_url(request: &ResolvedRequest) -> Result<Url, HttpClientError> {
        let mut url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        if let Some(AuthResolution::QueryParam { name, value }) = &request.auth {
            let kept: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(k, _)| k != name.as_str())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();

            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (k, v) in &kept {
                pairs.append_pair(k, v);
            }
            pairs.append_pair(name, value);
            drop(pairs);
        }

        Ok(url)
    }

    /// Builds the header map: declared headers first (appended as-is),
    /// then the auth decoration. Basic/bearer credentials overwrite any
    /// existing `Authorization` header; a header-placed API key is
    /// appended next to same-named headers instead of displacing them.
    fn build_headers(request: &ResolvedRequest) -> Result<HeaderMap, HttpClientError> {
        let mut headers = HeaderMap::new();

        for (name, value) in &request.headers {
            headers.append(parse_header_name(name)?, parse_header_value(name, value)?);
        }

        match &request.auth {
            Some(AuthResolution::Header { name, value }) => {
                headers.insert(parse_header_name(name)?, parse_header_value(name, value)?);
            }
            Some(AuthResolution::AppendHeader { name, value }) => {
                headers.append(parse_header_name(name)?, parse_header_value(name, value)?);
            }
            Some(AuthResolution::QueryParam { .. }) | None => {}
        }

        Ok(headers)
    }

    /// Maps reqwest errors to the transport error taxonomy.
    fn map_error(error: &reqwest::Error, timeout_ms: Option<u64>) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: timeout_ms.unwrap_or(0),
            };
        }

        let message = error.to_string();
        let lowered = message.to_lowercase();

        if error.is_connect() {
            let host = error
                .url()
                .and_then(|u| u.host_str().map(ToString::to_string))
                .unwrap_or_else(|| "unknown".to_string());

            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error.url().and_then(Url::port_or_known_default).unwrap_or(80),
                };
            }
            if lowered.contains("tls") || lowered.contains("certificate") || lowered.contains("ssl")
            {
                return HttpClientError::TlsError(message);
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(message)
    }
}

fn parse_header_name(name: &str) -> Result<HeaderName, HttpClientError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| HttpClientError::InvalidHeader(format!("{name}: {e}")))
}

fn parse_header_value(name: &str, value: &str) -> Result<HeaderValue, HttpClientError> {
    HeaderValue::from_str(value)
        .map_err(|e| HttpClientError::InvalidHeader(format!("{name}: {e}")))
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &ResolvedRequest) -> Result<ResponseSpec, HttpClientError> {
        let url = Self::build_url(request)?;
        let mut headers = Self::build_headers(request)?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        if let Some(timeout_ms) = request.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        if let Some(body) = &request.body {
            let json = serde_json::to_string(body)
                .map_err(|e| HttpClientError::InvalidBody(e.to_string()))?;
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            builder = builder.body(json);
        }

        builder = builder.headers(headers);

        tracing::debug!(method = %request.method, url = %request.url, "executing request");

        // The clock covers send through full body receipt, so latency
        // assertions include body-transfer time.
        let start = Instant::now();

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, request.timeout_ms))?;

        let status = response.status().as_u16();
        let response_headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, request.timeout_ms))?
            .to_vec();

        let duration = start.elapsed();

        Ok(ResponseSpec::new(
            status,
            response_headers,
            body_bytes,
            duration,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use restcheck_domain::AuthConfig;

    fn resolved(url: &str, auth: Option<AuthConfig>) -> ResolvedRequest {
        let mut request = ResolvedRequest::get(url);
        request.auth = auth.map(|a| a.resolve().unwrap());
        request
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_client_creation() {
        assert!(ReqwestHttpClient::new().is_ok());
    }

    #[test]
    fn test_query_api_key_preserves_existing_params() {
        let request = resolved(
            "https://x/y?a=1",
            Some(AuthConfig::api_key_query("X-Key", "abc")),
        );
        let url = ReqwestHttpClient::build_url(&request).unwrap();
        assert_eq!(url.as_str(), "https://x/y?a=1&X-Key=abc");

        // And no header is added for a query-placed key.
        let headers = ReqwestHttpClient::build_headers(&request).unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_query_api_key_overwrites_same_name() {
        let request = resolved(
            "https://x/y?key=old&a=1",
            Some(AuthConfig::api_key_query("key", "new")),
        );
        let url = ReqwestHttpClient::build_url(&request).unwrap();
        assert_eq!(url.as_str(), "https://x/y?a=1&key=new");
    }

    #[test]
    fn test_invalid_url() {
        let request = resolved("not a url", None);
        assert!(matches!(
            ReqwestHttpClient::build_url(&request),
            Err(HttpClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_basic_auth_overwrites_authorization_header() {
        let mut request = resolved("https://x/", Some(AuthConfig::basic("u", "p")));
        request
            .headers
            .insert("Authorization".to_string(), "stale".to_string());

        let headers = ReqwestHttpClient::build_headers(&request).unwrap();
        let values: Vec<_> = headers.get_all("authorization").iter().collect();
        assert_eq!(values, vec!["Basic dTpw"]);
    }

    #[test]
    fn test_header_api_key_is_appended_not_replacing() {
        let mut request = resolved("https://x/", Some(AuthConfig::api_key_header("X-Key", "v2")));
        request.headers.insert("X-Key".to_string(), "v1".to_string());

        let headers = ReqwestHttpClient::build_headers(&request).unwrap();
        let values: Vec<_> = headers.get_all("x-key").iter().collect();
        assert_eq!(values, vec!["v1", "v2"]);
    }

    #[test]
    fn test_invalid_header_name_rejected() {
        let mut request = resolved("https://x/", None);
        request
            .headers
            .insert("bad header".to_string(), "v".to_string());
        assert!(matches!(
            ReqwestHttpClient::build_headers(&request),
            Err(HttpClientError::InvalidHeader(_))
        ));
    }
}
