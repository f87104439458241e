//! Resource layer for the Namely API.
//!
//! Namely resources are plain JSON documents, so this layer does not model
//! them as types. It maps each named operation onto a fixed
//! `(method, path)` pair and hands the caller's [`RequestOptions`] to
//! [`NamelyClient::send`] untouched.
//!
//! - [`ResourcePath`]: Method and path template of one operation
//! - [`resources`]: The resource methods on [`NamelyClient`]
//!
//! [`RequestOptions`]: crate::RequestOptions
//! [`NamelyClient::send`]: crate::NamelyClient::send
//! [`NamelyClient`]: crate::NamelyClient

mod path;
pub mod resources;

pub use path::{ResourcePath, ID_PLACEHOLDER};
