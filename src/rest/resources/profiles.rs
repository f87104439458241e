//! Profile resource methods.
//!
//! Profiles are the employee records of a Namely company. When the client
//! is configured with `hide_salary` (the default), listing responses of the
//! form `{"profiles": [...]}` have each record's `salary` removed.
//!
//! # Example
//!
//! ```rust,ignore
//! use namely::RequestOptions;
//! use serde_json::json;
//!
//! let me = client.me(None).await?;
//! let profile = client.profile("8c5fd9b5", None).await?;
//!
//! let options = RequestOptions::new().body(json!({
//!     "profiles": [{"first_name": "Ada", "last_name": "Lovelace"}]
//! }));
//! let created = client.create_profile(Some(options)).await?;
//! ```

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET profiles`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "profiles");
/// `GET profiles/{id}`
pub const FIND: ResourcePath = ResourcePath::new(HttpMethod::Get, "profiles/{id}");
/// `POST profiles`
pub const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "profiles");
/// `PUT profiles/{id}`
pub const UPDATE: ResourcePath = ResourcePath::new(HttpMethod::Put, "profiles/{id}");
/// `GET profiles/me`
pub const CURRENT: ResourcePath = ResourcePath::new(HttpMethod::Get, "profiles/me");

/// Every profile path.
pub const PATHS: &[ResourcePath] = &[ALL, FIND, CREATE, UPDATE, CURRENT];

impl NamelyClient {
    /// Lists profiles.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn profiles(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }

    /// Fetches a single profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn profile(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&FIND, Some(id), options).await
    }

    /// Creates a profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn create_profile(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CREATE, None, options).await
    }

    /// Updates a profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn update_profile(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&UPDATE, Some(id), options).await
    }

    /// Fetches the profile of the access token's owner.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn me(&self, options: Option<RequestOptions>) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CURRENT, None, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_paths() {
        assert_eq!(ALL.build(None), "profiles");
        assert_eq!(FIND.build(Some("abc")), "profiles/abc");
        assert_eq!(CREATE.http_method, HttpMethod::Post);
        assert_eq!(UPDATE.http_method, HttpMethod::Put);
        assert_eq!(CURRENT.build(None), "profiles/me");
        assert!(!CURRENT.requires_id());
    }
}
