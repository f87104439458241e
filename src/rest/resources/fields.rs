//! Profile field resource methods.
//!
//! Fields describe the attributes available on a profile, including the
//! custom fields a company defines. They live under `profiles/fields`.

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET profiles/fields`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "profiles/fields");
/// `POST profiles/fields`
pub const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "profiles/fields");
/// `PUT profiles/fields/{id}`
pub const UPDATE: ResourcePath = ResourcePath::new(HttpMethod::Put, "profiles/fields/{id}");

/// Every field path.
pub const PATHS: &[ResourcePath] = &[ALL, CREATE, UPDATE];

impl NamelyClient {
    /// Lists profile fields.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn fields(&self, options: Option<RequestOptions>) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }

    /// Creates a custom profile field.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn create_field(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CREATE, None, options).await
    }

    /// Updates a profile field.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn update_field(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&UPDATE, Some(id), options).await
    }
}
