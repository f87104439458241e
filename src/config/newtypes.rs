//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Namely API access token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use namely::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the value of the `Authorization` header for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A Namely company name, used as the API subdomain.
///
/// `acme` addresses `https://acme.namely.com`. Only presence is checked;
/// the name is used verbatim.
///
/// # Example
///
/// ```rust
/// use namely::CompanyName;
///
/// let company = CompanyName::new("acme").unwrap();
/// assert_eq!(company.as_ref(), "acme");
/// assert_eq!(company.host(), "acme.namely.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    const DOMAIN: &'static str = "namely.com";

    /// Creates a new company name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCompanyName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::MissingCompanyName);
        }
        Ok(Self(name))
    }

    /// Returns the API host name for this company.
    #[must_use]
    pub fn host(&self) -> String {
        format!("{}.{}", self.0, Self::DOMAIN)
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CompanyName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CompanyName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated origin that replaces `https://{company}.namely.com`.
///
/// Useful when requests go through a proxy or a local test server.
/// The URL must carry a scheme and a host and may carry a port and a path
/// prefix. A query or fragment is rejected, since `/api/{version}` is
/// appended to it. Trailing slashes are ignored.
///
/// # Example
///
/// ```rust
/// use namely::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "127.0.0.1");
/// assert_eq!(url.origin(), "http://127.0.0.1:8080");
///
/// assert!(HostUrl::new("http://127.0.0.1:8080?debug=1").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme or host is
    /// missing, the port is not numeric, or the URL contains whitespace,
    /// a query or a fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        if url.contains(['?', '#']) || url.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let authority = rest.split('/').next().unwrap_or_default();
        let host = match authority.rsplit_once(':') {
            Some(_) if authority.ends_with(']') => authority,
            Some((host, port)) => {
                if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                host
            }
            None => authority,
        };
        if host.is_empty() {
            return Err(invalid());
        }

        let scheme_end = scheme.len();
        let host_end = scheme_end + 3 + host.len();

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }

    /// Returns the URL without trailing slashes.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::MissingAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::MissingAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("UBLIJWQAPSONNTCLWQEFOZCCESLEJRVT").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("UBLIJ"));
    }

    #[test]
    fn test_access_token_bearer_value() {
        let token = AccessToken::new("TOK").unwrap();
        assert_eq!(token.bearer(), "Bearer TOK");
    }

    #[test]
    fn test_company_name_rejects_empty_string() {
        assert!(matches!(
            CompanyName::new(""),
            Err(ConfigError::MissingCompanyName)
        ));
    }

    #[test]
    fn test_company_name_is_used_verbatim() {
        let company = CompanyName::new("companyName").unwrap();
        assert_eq!(company.as_ref(), "companyName");
        assert_eq!(company.host(), "companyName.namely.com");
    }

    #[test]
    fn test_company_name_serde() {
        let company = CompanyName::new("testing").unwrap();
        let json = serde_json::to_string(&company).unwrap();
        assert_eq!(json, r#""testing""#);

        let parsed: CompanyName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, company);

        let empty: Result<CompanyName, _> = serde_json::from_str(r#""""#);
        assert!(empty.is_err());
    }

    #[test]
    fn test_host_url_accepts_http_with_port() {
        let url = HostUrl::new("http://127.0.0.1:5555").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.origin(), "http://127.0.0.1:5555");
    }

    #[test]
    fn test_host_url_origin_drops_trailing_slashes() {
        let url = HostUrl::new("https://proxy.example.com//").unwrap();
        assert_eq!(url.origin(), "https://proxy.example.com");
    }

    #[test]
    fn test_host_url_rejects_invalid_urls() {
        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://proxy.example.com").is_err());
        assert!(HostUrl::new("ht1p://proxy.example.com").is_err());
        assert!(HostUrl::new("https://:8080").is_err());
        assert!(HostUrl::new("http://localhost:").is_err());
        assert!(HostUrl::new("http://localhost:80a").is_err());
        assert!(HostUrl::new("http://local host").is_err());
    }

    #[test]
    fn test_host_url_rejects_query_and_fragment() {
        for bad in ["http://h?x=1", "http://h/?x=1", "http://h:8080#top", "https://h/proxy?"] {
            assert!(
                matches!(HostUrl::new(bad), Err(ConfigError::InvalidHostUrl { .. })),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_host_url_accepts_bracketed_ipv6() {
        assert_eq!(HostUrl::new("http://[::1]").unwrap().host_name(), "[::1]");
        assert_eq!(HostUrl::new("http://[::1]:4010").unwrap().host_name(), "[::1]");
    }

    #[test]
    fn test_host_url_keeps_path_prefix() {
        let url = HostUrl::new("https://gateway.example.com/namely/").unwrap();
        assert_eq!(url.host_name(), "gateway.example.com");
        assert_eq!(url.origin(), "https://gateway.example.com/namely");
    }
}
