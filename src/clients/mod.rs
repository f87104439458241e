//! HTTP client types for Namely API communication.
//!
//! This module provides the request-dispatch layer for making authenticated
//! requests to the Namely API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The dispatcher every request goes through
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`RequestOptions`]: Caller-supplied headers, query parameters and body
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpError`]: Transport-level failures
//! - [`rest::NamelyClient`]: The public client with verb and resource methods
//!
//! # Dispatch Rules
//!
//! - URL: `{base_url}/{path}.json`, with exactly one `/` after the base URL
//! - `Authorization: Bearer {token}` and `Accept: application/json` are
//!   forced on every request, replacing any caller-supplied values
//! - Response bodies are parsed as JSON; an empty body becomes `null`
//! - Non-2xx statuses are returned as `Ok`; there are no retries

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod salary_filter;

pub use errors::HttpError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, RequestOptions};
pub use http_response::HttpResponse;
pub use salary_filter::{strip_salaries, SALARY_FIELD};

pub use rest::NamelyClient;
