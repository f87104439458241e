//! Transport error types for the Namely API client.
//!
//! Only transport-level failures are errors here. A response with a non-2xx
//! status is still a successful dispatch and is returned as an
//! [`HttpResponse`](crate::clients::HttpResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use namely::HttpError;
//!
//! match client.profiles(None).await {
//!     Ok(response) if response.is_ok() => println!("{}", response.body),
//!     Ok(response) => println!("Namely answered {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidJson { code, .. }) => println!("Unreadable body ({code})"),
//!     Err(HttpError::InvalidHeader { name }) => println!("Bad header {name}"),
//! }
//! ```

use thiserror::Error;

/// Errors raised while dispatching a request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, connection, TLS or request-building failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A caller-supplied header name or value cannot be sent.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The response body was not valid JSON.
    #[error("Response body with status {code} is not valid JSON: {source}")]
    InvalidJson {
        /// The HTTP status code of the response.
        code: u16,
        /// The parse failure.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_header_message_names_header() {
        let error = HttpError::InvalidHeader {
            name: "bad header".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid header 'bad header'.");
    }

    #[test]
    fn test_invalid_json_message_includes_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = HttpError::InvalidJson { code: 502, source };
        let message = error.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("not valid JSON"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
