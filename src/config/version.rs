//! Namely API version definitions.
//!
//! This module provides the [`ApiVersion`] type for specifying which version
//! of the Namely API to use.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Namely API version.
///
/// The version is the path segment following `/api/` in the base URL.
/// Namely currently publishes a single stable version, [`ApiVersion::V1`],
/// but any other segment is accepted so new versions work without a crate
/// release. An empty value means `v1`.
///
/// # Example
///
/// ```rust
/// use namely::ApiVersion;
///
/// let version = ApiVersion::default();
/// assert_eq!(version, ApiVersion::V1);
///
/// let version: ApiVersion = "v1beta".parse().unwrap();
/// assert_eq!(version.to_string(), "v1beta");
///
/// assert_eq!("".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
/// assert!("v1/extra".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(Cow<'static, str>);

impl ApiVersion {
    /// API version 1.
    pub const V1: Self = Self(Cow::Borrowed("v1"));

    /// Creates a validated API version.
    ///
    /// Surrounding whitespace is ignored and an empty value yields
    /// [`ApiVersion::V1`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version contains
    /// whitespace or one of `/`, `?` and `#`, since it must stay a single
    /// path segment.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        let trimmed = version.trim();

        if trimmed.is_empty() {
            return Ok(Self::V1);
        }

        if trimmed
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
        {
            return Err(ConfigError::InvalidApiVersion { version });
        }

        if trimmed == Self::V1.as_str() {
            Ok(Self::V1)
        } else {
            Ok(Self(Cow::Owned(trimmed.to_string())))
        }
    }

    /// Returns the version path segment (e.g. `"v1"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V1
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_v1() {
        assert_eq!(ApiVersion::default(), ApiVersion::V1);
        assert_eq!(ApiVersion::default().to_string(), "v1");
    }

    #[test]
    fn test_parses_known_and_custom_versions() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("v2".parse::<ApiVersion>().unwrap().as_str(), "v2");
        assert_eq!(" v10 ".parse::<ApiVersion>().unwrap().as_str(), "v10");
        assert_eq!(ApiVersion::new("v1beta").unwrap().as_str(), "v1beta");
        assert_eq!(ApiVersion::new("2").unwrap().as_str(), "2");
    }

    #[test]
    fn test_empty_version_is_v1() {
        assert_eq!(ApiVersion::new("").unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::new("   ").unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::new(String::new()).unwrap().as_str(), "v1");
    }

    #[test]
    fn test_rejects_versions_that_leave_the_path_segment() {
        for bad in ["v1/profiles", "v1?x=1", "v1#top", "v 1"] {
            let result = bad.parse::<ApiVersion>();
            assert!(
                matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_serde_uses_path_segment() {
        let json = serde_json::to_string(&ApiVersion::new("v2").unwrap()).unwrap();
        assert_eq!(json, r#""v2""#);

        let parsed: ApiVersion = serde_json::from_str(r#""v1""#).unwrap();
        assert_eq!(parsed, ApiVersion::V1);

        let invalid: Result<ApiVersion, _> = serde_json::from_str(r#""v1/beta""#);
        assert!(invalid.is_err());
    }
}
