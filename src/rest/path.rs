//! Path definitions for Namely resources.
//!
//! Each resource operation is a fixed pairing of an HTTP method and a path
//! template. Templates use a single `{id}` placeholder, which is replaced
//! verbatim by the caller's identifier.
//!
//! # Example
//!
//! ```rust
//! use namely::rest::ResourcePath;
//! use namely::HttpMethod;
//!
//! const JOB_TIER: ResourcePath = ResourcePath::new(HttpMethod::Put, "job_tiers/{id}");
//!
//! assert!(JOB_TIER.requires_id());
//! assert_eq!(JOB_TIER.build(Some("id1")), "job_tiers/id1");
//! ```

use crate::clients::HttpMethod;

/// The placeholder replaced by a resource identifier.
pub const ID_PLACEHOLDER: &str = "{id}";

/// The method and path template of one resource operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The path template, relative to the base URL, without `.json`.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(http_method: HttpMethod, template: &'static str) -> Self {
        Self {
            http_method,
            template,
        }
    }

    /// Returns `true` if the template contains the `{id}` placeholder.
    #[must_use]
    pub fn requires_id(&self) -> bool {
        self.template.contains(ID_PLACEHOLDER)
    }

    /// Builds the concrete path.
    ///
    /// The identifier is inserted verbatim; it is neither validated nor
    /// escaped. Without an identifier the template is returned as is.
    #[must_use]
    pub fn build(&self, id: Option<&str>) -> String {
        id.map_or_else(
            || self.template.to_string(),
            |id| self.template.replace(ID_PLACEHOLDER, id),
        )
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};
