//! Country resource methods.
//!
//! Countries are read-only and identified by their ISO 3166-1 alpha-2 code,
//! so `client.country("XK", None)` fetches `countries/XK.json`.

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET countries`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "countries");
/// `GET countries/{id}`
pub const FIND: ResourcePath = ResourcePath::new(HttpMethod::Get, "countries/{id}");

/// Every country path.
pub const PATHS: &[ResourcePath] = &[ALL, FIND];

impl NamelyClient {
    /// Lists countries.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn countries(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }

    /// Fetches a single country by code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn country(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&FIND, Some(id), options).await
    }
}
