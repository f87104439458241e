//! HTTP client for Namely API communication.
//!
//! This module provides the [`HttpClient`] type, the single dispatcher every
//! request goes through.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::salary_filter::strip_salaries;
use crate::config::{AccessToken, NamelyConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client for making requests to the Namely API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers, with `Authorization` and `Accept` always forced
/// - JSON response parsing
/// - The optional salary filter on profile listings
///
/// A non-2xx status is returned as a normal [`HttpResponse`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://acme.namely.com/api/v1`).
    base_url: String,
    /// Token used for the `Authorization` header.
    access_token: AccessToken,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Whether salaries are stripped from profile listings.
    hide_salary: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client around an existing `reqwest::Client`.
    ///
    /// Timeouts, proxies and connection pooling are whatever `client` was
    /// built with.
    #[must_use]
    pub fn new(config: &NamelyConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Namely API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());

        Self {
            client,
            base_url: config.base_url().to_string(),
            access_token: config.access_token().clone(),
            default_headers,
            hide_salary: config.hide_salary(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    ///
    /// `Authorization` is not listed; it is added to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns whether salaries are stripped from profile listings.
    #[must_use]
    pub const fn hide_salary(&self) -> bool {
        self.hide_salary
    }

    /// Builds the header map for a request.
    ///
    /// Order of precedence, lowest first: default headers, caller headers,
    /// then the forced `Authorization` and `Accept` headers. Names compare
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if a caller header cannot be encoded.
    pub fn request_headers(&self, request: &HttpRequest) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();

        let supplied = self.default_headers.iter().chain(&request.options.headers);
        for (name, value) in supplied {
            let invalid = || HttpError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        let mut authorization = HeaderValue::from_str(&self.access_token.bearer())
            .map_err(|_| HttpError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
            })?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Ok(headers)
    }

    /// Sends an HTTP request to the Namely API.
    ///
    /// Exactly one request is sent. Non-2xx responses are returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A caller header cannot be encoded (`InvalidHeader`)
    /// - The transport fails (`Network`)
    /// - A non-empty body is not JSON (`InvalidJson`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = request.url(&self.base_url);
        let headers = self.request_headers(&request)?;

        tracing::debug!(
            method = request.http_method.as_str(),
            url = %url,
            "Dispatching Namely API request"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        req_builder = req_builder.headers(headers);

        if !request.options.query.is_empty() {
            req_builder = req_builder.query(&request.options.query);
        }

        if let Some(body) = &request.options.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_bytes = res.bytes().await?;
        let mut body = Self::parse_body(code, &body_bytes)?;

        if self.hide_salary {
            let stripped = strip_salaries(&mut body);
            if stripped > 0 {
                tracing::debug!("Removed salary from {stripped} profile(s)");
            }
        }

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            tracing::debug!(status = code, "Namely API request to {} completed", request.path);
        } else {
            tracing::debug!(
                status = code,
                "Namely API request to {} returned a non-success status; forwarding to caller",
                request.path
            );
        }

        Ok(response)
    }

    /// Parses a response body as JSON without any lossy UTF-8 decoding.
    ///
    /// A body that is empty or only whitespace becomes `null`.
    fn parse_body(code: u16, bytes: &[u8]) -> Result<serde_json::Value, HttpError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_slice(bytes).map_err(|source| HttpError::InvalidJson { code, source })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
