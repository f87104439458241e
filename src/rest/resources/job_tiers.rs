//! Job tier resource methods.
//!
//! # Example
//!
//! ```rust,ignore
//! use namely::RequestOptions;
//! use serde_json::json;
//!
//! // PUT https://acme.namely.com/api/v1/job_tiers/id1.json
//! let options = RequestOptions::new().body(json!({"title": "x"}));
//! let response = client.update_job_tier("id1", Some(options)).await?;
//! ```

use crate::clients::{HttpError, HttpMethod, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// `GET job_tiers`
pub const ALL: ResourcePath = ResourcePath::new(HttpMethod::Get, "job_tiers");
/// `GET job_tiers/{id}`
pub const FIND: ResourcePath = ResourcePath::new(HttpMethod::Get, "job_tiers/{id}");
/// `POST job_tiers`
pub const CREATE: ResourcePath = ResourcePath::new(HttpMethod::Post, "job_tiers");
/// `PUT job_tiers/{id}`
pub const UPDATE: ResourcePath = ResourcePath::new(HttpMethod::Put, "job_tiers/{id}");

/// Every job tier path.
pub const PATHS: &[ResourcePath] = &[ALL, FIND, CREATE, UPDATE];

impl NamelyClient {
    /// Lists job tiers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn job_tiers(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&ALL, None, options).await
    }

    /// Fetches a single job tier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn job_tier(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&FIND, Some(id), options).await
    }

    /// Creates a job tier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn create_job_tier(
        &self,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&CREATE, None, options).await
    }

    /// Updates a job tier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for transport-level failures only.
    pub async fn update_job_tier(
        &self,
        id: &str,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        self.request_resource(&UPDATE, Some(id), options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_job_tier_path() {
        assert_eq!(UPDATE.http_method, HttpMethod::Put);
        assert_eq!(UPDATE.build(Some("id1")), "job_tiers/id1");
    }
}
