//! Job title resource methods.

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET job_titles`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "job_titles");
/// `GET job_titles/{id}`
pub const FIND: ResourcePath = ResourcePath::new(HttpMethod::Get, "job_titles/{id}");
/// `POST job_titles`
pub const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "job_titles");
/// `PUT job_titles/{id}`
pub const UPDATE: ResourcePath = ResourcePath::new(HttpMethod::Put, "job_titles/{id}");

/// Every job title path.
pub const PATHS: &[ResourcePath] = &[ALL, FIND, CREATE, UPDATE];

impl NamelyClient {
    /// Lists job titles.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn job_titles(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }

    /// Fetches a single job title.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn job_title(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&FIND, Some(id), options).await
    }

    /// Creates a job title.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn create_job_title(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CREATE, None, options).await
    }

    /// Updates a job title.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn update_job_title(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&UPDATE, Some(id), options).await
    }
}
