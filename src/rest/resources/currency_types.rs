//! Currency type resource methods.

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET currency_types`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "currency_types");

/// Every currency type path.
pub const PATHS: &[ResourcePath] = &[ALL];

impl NamelyClient {
    /// Lists the currency types Namely supports.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn currency_types(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }
}
