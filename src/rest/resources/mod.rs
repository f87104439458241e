//! Resource methods on [`NamelyClient`].
//!
//! Each submodule adds one group of methods to [`NamelyClient`] and exposes
//! the [`ResourcePath`] constants those methods resolve to. Every method is a
//! thin wrapper over [`NamelyClient::send`]: it picks the HTTP method, fills
//! in the identifier if the path has one, and forwards the caller's options
//! unchanged.
//!
//! # Available Resources
//!
//! | Module | Methods |
//! |--------|---------|
//! | [`profiles`] | `profiles`, `profile`, `create_profile`, `update_profile`, `me` |
//! | [`fields`] | `fields`, `create_field`, `update_field` |
//! | [`sections`] | `sections`, `section`, `create_section`, `update_section` |
//! | [`files`] | `create_file` |
//! | [`events`] | `events`, `event`, `create_event`, `update_event` |
//! | [`currency_types`] | `currency_types` |
//! | [`countries`] | `countries`, `country` |
//! | [`job_titles`] | `job_titles`, `job_title`, `create_job_title`, `update_job_title` |
//! | [`job_tiers`] | `job_tiers`, `job_tier`, `create_job_tier`, `update_job_tier` |
//!
//! # Example
//!
//! ```rust,ignore
//! use namely::RequestOptions;
//!
//! // GET https://acme.namely.com/api/v1/countries/XK.json
//! let kosovo = client.country("XK", None).await?;
//!
//! // GET https://acme.namely.com/api/v1/job_titles.json?page=2
//! let options = RequestOptions::new().query_param("page", "2");
//! let titles = client.job_titles(Some(options)).await?;
//! ```

pub mod countries;
pub mod currency_types;
pub mod events;
pub mod fields;
pub mod files;
pub mod job_tiers;
pub mod job_titles;
pub mod profiles;
pub mod sections;

use crate::clients::{HttpError, HttpResponse, NamelyClient, RequestOptions};
use crate::rest::ResourcePath;

/// Every path exposed through a resource method, grouped by resource.
pub const ALL_PATHS: &[&[ResourcePath]] = &[
    profiles::PATHS,
    fields::PATHS,
    sections::PATHS,
    files::PATHS,
    events::PATHS,
    currency_types::PATHS,
    countries::PATHS,
    job_titles::PATHS,
    job_tiers::PATHS,
];

impl NamelyClient {
    pub(crate) async fn request_resource(
        &self,
        path: &ResourcePath,
        id: Option<&str>,
        options: Option<RequestOptions>,
    ) -> Result<HttpResponse, HttpError> {
        debug_assert_eq!(path.requires_id(), id.is_some());
        self.send(path.http_method, &path.build(id), options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique_per_method() {
        let mut seen = HashSet::new();
        for path in ALL_PATHS.iter().flat_map(|group| group.iter()) {
            assert!(seen.insert((path.http_method, path.template)));
        }
        assert_eq!(seen.len(), 28);
    }

    #[test]
    fn test_templates_are_relative_without_suffix() {
        for path in ALL_PATHS.iter().flat_map(|group| group.iter()) {
            assert!(!path.template.starts_with('/'));
            assert!(!path.template.ends_with(".json"));
        }
    }
}
