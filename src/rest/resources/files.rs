//! File resource methods.
//!
//! Namely only exposes file creation through this client. The request body
//! is forwarded as JSON like any other.

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `POST files`
pub const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "files");

/// Every file path.
pub const PATHS: &[ResourcePath] = &[CREATE];

impl NamelyClient {
    /// Creates a file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn create_file(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CREATE, None, options).await
    }
}
