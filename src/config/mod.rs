//! Configuration types for the Namely API client.
//!
//! This module provides the configuration used to initialize a
//! [`NamelyClient`](crate::NamelyClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`NamelyConfig`]: The immutable bundle of credentials and derived base URL
//! - [`NamelyConfigBuilder`]: A builder for constructing [`NamelyConfig`] instances
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`CompanyName`]: The company subdomain
//! - [`HostUrl`]: A validated origin override
//! - [`ApiVersion`]: The Namely API version to use
//!
//! # Example
//!
//! ```rust
//! use namely::{ApiVersion, NamelyConfig};
//!
//! let config = NamelyConfig::builder()
//!     .access_token("my-token")
//!     .company_name("acme")
//!     .api_version(ApiVersion::V1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://acme.namely.com/api/v1");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, CompanyName, HostUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Environment variable holding the access token.
pub const ENV_ACCESS_TOKEN: &str = "NAMELY_ACCESS_TOKEN";
/// Environment variable holding the company name.
pub const ENV_COMPANY_NAME: &str = "NAMELY_COMPANY_NAME";
/// Environment variable holding the API version (optional).
pub const ENV_API_VERSION: &str = "NAMELY_API_VERSION";
/// Environment variable holding a host override (optional).
pub const ENV_API_HOST: &str = "NAMELY_API_HOST";
/// Environment variable toggling the salary filter (optional).
pub const ENV_HIDE_SALARY: &str = "NAMELY_HIDE_SALARY";

/// Configuration for the Namely API client.
///
/// The base URL is derived once at build time and never changes afterwards.
///
/// # Thread Safety
///
/// `NamelyConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use namely::{ApiVersion, NamelyConfig};
///
/// let config = NamelyConfig::builder()
///     .access_token("1abcdefghijklmnoqrstuvyxz2")
///     .company_name("testing")
///     .api_version("v2".parse::<ApiVersion>().unwrap())
///     .hide_salary(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "https://testing.namely.com/api/v2");
/// assert!(!config.hide_salary());
/// ```
#[derive(Clone, Debug)]
pub struct NamelyConfig {
    access_token: AccessToken,
    company_name: CompanyName,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    hide_salary: bool,
    user_agent_prefix: Option<String>,
    base_url: String,
}

impl NamelyConfig {
    /// Creates a new builder for constructing a `NamelyConfig`.
    #[must_use]
    pub fn builder() -> NamelyConfigBuilder {
        NamelyConfigBuilder::new()
    }

    /// Builds a configuration from `NAMELY_*` environment variables.
    ///
    /// `NAMELY_ACCESS_TOKEN` and `NAMELY_COMPANY_NAME` are required.
    /// `NAMELY_API_VERSION`, `NAMELY_API_HOST` and `NAMELY_HIDE_SALARY`
    /// are optional; empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`NamelyConfigBuilder::build`], plus
    /// [`ConfigError::InvalidApiVersion`], [`ConfigError::InvalidHostUrl`]
    /// and [`ConfigError::InvalidFlag`] for malformed optional values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(token) = var(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(token);
        }
        if let Some(company) = var(ENV_COMPANY_NAME) {
            builder = builder.company_name(company);
        }

        // Validate credentials before looking at the optional settings.
        builder.check_credentials()?;

        if let Some(version) = var(ENV_API_VERSION) {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(host) = var(ENV_API_HOST) {
            builder = builder.api_host(HostUrl::new(host)?);
        }
        if let Some(flag) = var(ENV_HIDE_SALARY) {
            builder = builder.hide_salary(parse_flag(ENV_HIDE_SALARY, &flag)?);
        }

        builder.build()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the company name.
    #[must_use]
    pub const fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns whether salaries are stripped from profile listings.
    #[must_use]
    pub const fn hide_salary(&self) -> bool {
        self.hide_salary
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL every request path is appended to.
    ///
    /// `https://{company_name}.namely.com/api/{api_version}` unless a host
    /// override is configured.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Verify NamelyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NamelyConfig>();
};

/// Builder for constructing [`NamelyConfig`] instances.
///
/// Required fields are `access_token` and `company_name`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V1`]
/// - `api_host`: `None`
/// - `hide_salary`: `true`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct NamelyConfigBuilder {
    access_token: Option<String>,
    company_name: Option<String>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    hide_salary: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl NamelyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the company name (required).
    #[must_use]
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the `https://{company}.namely.com` origin.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets whether `salary` is stripped from `{"profiles": [...]}` bodies.
    #[must_use]
    pub const fn hide_salary(mut self, hide: bool) -> Self {
        self.hide_salary = Some(hide);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    fn check_credentials(&self) -> Result<(AccessToken, CompanyName), ConfigError> {
        let access_token = self
            .access_token
            .clone()
            .ok_or(ConfigError::MissingAccessToken)
            .and_then(AccessToken::new)?;
        let company_name = self
            .company_name
            .clone()
            .ok_or(ConfigError::MissingCompanyName)
            .and_then(CompanyName::new)?;
        Ok((access_token, company_name))
    }

    /// Builds the [`NamelyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if no non-empty access
    /// token was set; otherwise [`ConfigError::MissingCompanyName`] if no
    /// non-empty company name was set.
    pub fn build(self) -> Result<NamelyConfig, ConfigError> {
        let (access_token, company_name) = self.check_credentials()?;
        let api_version = self.api_version.unwrap_or_default();

        let origin = self.api_host.as_ref().map_or_else(
            || format!("https://{}", company_name.host()),
            |host| host.origin().to_string(),
        );
        let base_url = format!("{origin}/api/{api_version}");

        Ok(NamelyConfig {
            access_token,
            company_name,
            api_version,
            api_host: self.api_host,
            hide_salary: self.hide_salary.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
            base_url,
        })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
