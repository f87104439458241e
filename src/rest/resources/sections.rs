//! Section resource methods.

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET sections`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "sections");
/// `GET sections/{id}`
pub const FIND: ResourcePath = ResourcePath::new(HttpMethod::Get, "sections/{id}");
/// `POST sections`
pub const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "sections");
/// `PUT sections/{id}`
pub const UPDATE: ResourcePath = ResourcePath::new(HttpMethod::Put, "sections/{id}");

/// Every section path.
pub const PATHS: &[ResourcePath] = &[ALL, FIND, CREATE, UPDATE];

impl NamelyClient {
    /// Lists profile sections.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn sections(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }

    /// Fetches a single section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn section(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&FIND, Some(id), options).await
    }

    /// Creates a section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn create_section(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CREATE, None, options).await
    }

    /// Updates a section.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn update_section(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&UPDATE, Some(id), options).await
    }
}
