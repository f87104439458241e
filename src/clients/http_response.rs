//! HTTP response types for the Namely API client.
//!
//! This module provides the [`HttpResponse`] returned by every dispatch.

use std::collections::HashMap;

/// An HTTP response from the Namely API.
///
/// Returned for every completed request, including non-2xx statuses.
/// Callers decide how to interpret `code`.
///
/// # Example
///
/// ```rust
/// use namely::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let response = HttpResponse::new(404, HashMap::new(), json!({"message": "Not found"}));
/// assert!(!response.is_ok());
/// assert_eq!(response.body["message"], "Not found");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-case name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `null` when the body was empty.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
