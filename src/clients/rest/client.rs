//! REST client implementation for the Namely API.
//!
//! This module provides the [`NamelyClient`] type for making REST API
//! requests with forced bearer authentication and JSON responses.

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RequestOptions};
use crate::config::NamelyConfig;
use crate::error::ConfigError;

/// REST API client for the Namely API.
///
/// Provides `send` plus `get`, `post`, `put` and `delete`. Every method
/// issues exactly one request and resolves to exactly one `Result`.
/// Passing `None` as options is the same as passing
/// [`RequestOptions::default()`].
///
/// # Thread Safety
///
/// `NamelyClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use namely::{NamelyClient, NamelyConfig, RequestOptions};
/// use serde_json::json;
///
/// let config = NamelyConfig::builder()
///     .access_token("TOK")
///     .company_name("acme")
///     .build()?;
/// let client = NamelyClient::new(config)?;
///
/// // GET https://acme.namely.com/api/v1/profiles.json
/// let response = client.get("profiles", None).await?;
///
/// // PUT https://acme.namely.com/api/v1/job_tiers/id1.json
/// let options = RequestOptions::new().body(json!({"title": "x"}));
/// let response = client.put("job_tiers/id1", Some(options)).await?;
/// ```
#[derive(Debug)]
pub struct NamelyClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The configuration this client was built from.
    config: NamelyConfig,
}

// Verify NamelyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NamelyClient>();
};

impl NamelyClient {
    /// Creates a new client with a default rustls-backed transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the transport cannot be created
    /// (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use namely::{NamelyClient, NamelyConfig};
    ///
    /// let config = NamelyConfig::builder()
    ///     .access_token("TOK")
    ///     .company_name("acme")
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = NamelyClient::new(config).unwrap();
    /// assert_eq!(client.base_url(), "https://acme.namely.com/api/v1");
    /// ```
    pub fn new(config: NamelyConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self::with_http_client(config, client))
    }

    /// Creates a new client around a caller-built `reqwest::Client`.
    ///
    /// Use this to configure timeouts, proxies or connection limits; this
    /// crate imposes none of its own.
    #[must_use]
    pub fn with_http_client(config: NamelyConfig, client: reqwest::Client) -> Self {
        if let Some(host) = config.api_host() {
            tracing::debug!(
                "Namely client for {} overriding API host with {}",
                config.company_name(),
                host.origin()
            );
        }

        let http_client = HttpClient::new(&config, client);

        Self {
            http_client,
            config,
        }
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &NamelyConfig {
        &self.config
    }

    /// Returns the base URL every path is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Sends a request with the given method to `path`.
    ///
    /// This is the single entry point every other method funnels through.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The resource path, with or without a leading slash and
    ///   without the `.json` suffix
    /// * `options` - Optional headers, query parameters and body
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::new(method, path, options);
        self.http_client.request(request).await
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Get, path, options).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn post(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Post, path, options).await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn put(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Put, path, options).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.send(HttpMethod::Delete, path, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;

    fn create_test_config() -> NamelyConfig {
        NamelyConfig::builder()
            .access_token("TOK")
            .company_name("acme")
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_new_uses_config_base_url() {
        let client = NamelyClient::new(create_test_config()).unwrap();

        assert_eq!(client.base_url(), "https://acme.namely.com/api/v1");
        assert_eq!(client.config().company_name().as_ref(), "acme");
    }

    #[test]
    fn test_client_with_http_client_and_host_override() {
        let config = NamelyConfig::builder()
            .access_token("TOK")
            .company_name("acme")
            .api_host(HostUrl::new("http://localhost:4010").unwrap())
            .build()
            .unwrap();

        let client = NamelyClient::with_http_client(config, reqwest::Client::new());
        assert_eq!(client.base_url(), "http://localhost:4010/api/v1");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NamelyClient>();
    }
}
