//! Error types for the Namely API client.
//!
//! This module contains the error type raised while building a client
//! configuration. Transport-level errors live in [`crate::clients::HttpError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that an
//! incomplete configuration never produces a partially usable client.
//!
//! # Example
//!
//! ```rust
//! use namely::{ConfigError, NamelyConfig};
//!
//! let result = NamelyConfig::builder().company_name("acme").build();
//! assert!(matches!(result, Err(ConfigError::MissingAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Required credentials are checked in a fixed order: the access token
/// first, then the company name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No access token (or an empty one) was supplied.
    #[error("Namely must be initialized with an access token")]
    MissingAccessToken,

    /// No company name (or an empty one) was supplied.
    #[error("Namely must be initialized with a company name")]
    MissingCompanyName,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a single path segment such as 'v1'")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A boolean setting could not be parsed.
    #[error("Invalid value '{value}' for {name}. Expected 'true', 'false', '1' or '0'.")]
    InvalidFlag {
        /// The name of the setting.
        name: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// The underlying HTTP transport could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The reason reported by the transport.
        reason: String,
    },
}
