//! Event resource methods.
//!
//! Events are company activity items: announcements, anniversaries,
//! birthdays and the like.
//!
//! # Example
//!
//! ```rust,ignore
//! use namely::RequestOptions;
//!
//! let options = RequestOptions::new().query_param("filter[type]", "birthday");
//! let birthdays = client.events(Some(options)).await?;
//! ```

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET events`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "events");
/// `GET events/{id}`
pub const FIND: ResourcePath = ResourcePath::new(HttpMethod::Get, "events/{id}");
/// `POST events`
pub const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "events");
/// `PUT events/{id}`
pub const UPDATE: ResourcePath = ResourcePath::new(HttpMethod::Put, "events/{id}");

/// Every event path.
pub const PATHS: &[ResourcePath] = &[ALL, FIND, CREATE, UPDATE];

impl NamelyClient {
    /// Lists events.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn events(&self, options: Option<RequestOptions>) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }

    /// Fetches a single event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn event(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&FIND, Some(id), options).await
    }

    /// Creates an event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn create_event(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CREATE, None, options).await
    }

    /// Updates an event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn update_event(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&UPDATE, Some(id), options).await
    }
}
