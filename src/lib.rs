//! # Namely API Rust Client
//!
//! A Rust client for the Namely HR REST API, providing validated
//! configuration, bearer authentication and one method per resource
//! operation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`NamelyConfig`] and [`NamelyConfigBuilder`]
//! - Validated newtypes for the access token, company name and host override
//! - A single request path with forced `Authorization` and `Accept` headers
//! - Generic `get`, `post`, `put` and `delete` calls on [`NamelyClient`]
//! - Resource methods for profiles, fields, sections, files, events,
//!   currency types, countries, job titles and job tiers
//! - Removal of salary data from profile listings, on by default
//!
//! ## Quick Start
//!
//! ```rust
//! use namely::{NamelyClient, NamelyConfig};
//!
//! let config = NamelyConfig::builder()
//!     .access_token("1abcdefghijklmnoqrstuvyxz2")
//!     .company_name("testing")
//!     .build()
//!     .unwrap();
//!
//! let client = NamelyClient::new(config).unwrap();
//! assert_eq!(client.base_url(), "https://testing.namely.com/api/v1");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use namely::{NamelyClient, NamelyConfig, RequestOptions};
//! use serde_json::json;
//!
//! let client = NamelyClient::new(NamelyConfig::from_env()?)?;
//!
//! // GET https://testing.namely.com/api/v1/profiles/me.json
//! let me = client.me(None).await?;
//! if me.is_ok() {
//!     println!("{}", me.body["profiles"][0]["email"]);
//! }
//!
//! // PUT https://testing.namely.com/api/v1/job_tiers/id1.json
//! let options = RequestOptions::new().body(json!({"title": "x"}));
//! let response = client.update_job_tier("id1", Some(options)).await?;
//! println!("{}", response.code);
//! ```
//!
//! ## Errors
//!
//! Configuration problems surface as [`ConfigError`] when the config is
//! built. Requests fail with [`HttpError`] only when no usable response was
//! received; a 4xx or 5xx status is returned as an ordinary
//! [`HttpResponse`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One request per call**: No retries, no pagination

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiVersion, CompanyName, HostUrl, NamelyConfig, NamelyConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NamelyClient, RequestOptions,
};
