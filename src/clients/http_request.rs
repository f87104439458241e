//! HTTP request types for the Namely API client.
//!
//! This module provides [`HttpMethod`], the caller-facing [`RequestOptions`],
//! and the [`HttpRequest`] handed to the dispatcher.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// HTTP methods supported by the Namely API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Per-call transport options: extra headers, query parameters and a JSON body.
///
/// The dispatcher always overwrites `Authorization` and `Accept`, so values
/// supplied here for those headers never reach the wire.
///
/// # Example
///
/// ```rust
/// use namely::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .query_param("limit", "50")
///     .header("X-Request-Source", "payroll")
///     .body(json!({"job_tiers": [{"title": "Senior"}]}));
///
/// assert_eq!(options.query.get("limit"), Some(&"50".to_string()));
/// assert!(options.body.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    /// Additional headers to include in the request.
    pub headers: HashMap<String, String>,
    /// Query parameters to append to the URL.
    pub query: HashMap<String, String>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets all headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the request body by serializing `body` to JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Returns `true` if no header, query parameter or body is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.query.is_empty() && self.body.is_none()
    }
}

/// A request to be dispatched to the Namely API.
///
/// `path` is relative to the configured base URL, with or without a
/// leading slash and without the `.json` suffix.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The resource path for this request.
    pub path: String,
    /// Caller-supplied transport options.
    pub options: RequestOptions,
}

impl HttpRequest {
    /// Creates a request. `None` options are treated as empty options.
    #[must_use]
    pub fn new(
        http_method: HttpMethod,
        path: impl Into<String>,
        options: Option<RequestOptions>,
    ) -> Self {
        Self {
            http_method,
            path: path.into(),
            options: options.unwrap_or_default(),
        }
    }

    /// Returns the full URL for this request under `base_url`.
    ///
    /// Exactly one `/` separates the base URL and the path, and `.json` is
    /// appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use namely::clients::{HttpMethod, HttpRequest};
    ///
    /// let base = "https://acme.namely.com/api/v1";
    /// let a = HttpRequest::new(HttpMethod::Get, "profiles", None);
    /// let b = HttpRequest::new(HttpMethod::Get, "/profiles", None);
    /// assert_eq!(a.url(base), "https://acme.namely.com/api/v1/profiles.json");
    /// assert_eq!(a.url(base), b.url(base));
    /// ```
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}.json",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://acme.namely.com/api/v1";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_none_options_are_empty_options() {
        let request = HttpRequest::new(HttpMethod::Get, "profiles", None);
        assert_eq!(request.options, RequestOptions::default());
        assert!(request.options.is_empty());
    }

    #[test]
    fn test_url_appends_json_suffix() {
        let request = HttpRequest::new(HttpMethod::Get, "countries/XK", None);
        assert_eq!(
            request.url(BASE),
            "https://acme.namely.com/api/v1/countries/XK.json"
        );
    }

    #[test]
    fn test_url_normalizes_single_separator() {
        let with_slash = HttpRequest::new(HttpMethod::Get, "/profiles/me", None);
        let without_slash = HttpRequest::new(HttpMethod::Get, "profiles/me", None);

        assert_eq!(with_slash.url(BASE), without_slash.url(BASE));
        assert_eq!(
            with_slash.url("https://acme.namely.com/api/v1/"),
            "https://acme.namely.com/api/v1/profiles/me.json"
        );
    }

    #[test]
    fn test_url_does_not_validate_ids() {
        let request = HttpRequest::new(HttpMethod::Get, "profiles/not an id", None);
        assert_eq!(
            request.url(BASE),
            "https://acme.namely.com/api/v1/profiles/not an id.json"
        );
    }

    #[test]
    fn test_options_builder_chaining() {
        let options = RequestOptions::new()
            .query_param("limit", "50")
            .query_param("page", "2")
            .header("X-Custom", "value")
            .body(json!({"title": "x"}));

        assert_eq!(options.query.len(), 2);
        assert_eq!(options.query.get("page"), Some(&"2".to_string()));
        assert_eq!(options.headers.get("X-Custom"), Some(&"value".to_string()));
        assert_eq!(options.body, Some(json!({"title": "x"})));
        assert!(!options.is_empty());
    }

    #[test]
    fn test_options_json_serializes_body() {
        #[derive(Serialize)]
        struct JobTier<'a> {
            title: &'a str,
        }

        let options = RequestOptions::new()
            .json(&JobTier { title: "Senior" })
            .unwrap();
        assert_eq!(options.body, Some(json!({"title": "Senior"})));
    }
}
