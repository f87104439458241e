//! REST API client for the Namely API.
//!
//! This module provides [`NamelyClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient) dispatcher. It offers `send`,
//! the four verb methods, and the resource methods defined in
//! [`crate::rest::resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use namely::{NamelyClient, NamelyConfig, RequestOptions};
//!
//! let config = NamelyConfig::builder()
//!     .access_token("your-token")
//!     .company_name("acme")
//!     .build()?;
//!
//! let client = NamelyClient::new(config)?;
//!
//! // Raw verb call
//! let response = client.get("profiles/me", None).await?;
//! println!("Me: {}", response.body);
//!
//! // Resource method with options
//! let options = RequestOptions::new().query_param("limit", "50");
//! let response = client.profiles(Some(options)).await?;
//! ```
//!
//! # Paths
//!
//! Paths are resolved against the base URL with exactly one `/` between
//! them, and `.json` is appended: `profiles` and `/profiles` both resolve
//! to `https://acme.namely.com/api/v1/profiles.json`.
//!
//! # Status Codes
//!
//! A non-2xx status is not an error. The response is returned as `Ok` and
//! callers inspect [`HttpResponse::code`](crate::HttpResponse::code).

mod client;

pub use client::NamelyClient;
