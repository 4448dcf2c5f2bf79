//! Core domain entities.
//!
//! The service has a single entity, [`UrlMapping`], with a separate
//! [`NewUrlMapping`] struct used for inserts (the store assigns `created_at`).

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
