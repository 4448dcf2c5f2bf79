//! Repository trait for URL mapping storage.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable key-value store for id → URL mappings.
///
/// Only inserts and lookups are exposed; mappings are never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if the id already exists.
    /// Returns [`AppError::StorageUnavailable`] on backend errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Returns the mapping stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `id`.
    /// Returns [`AppError::StorageUnavailable`] on backend errors.
    async fn lookup(&self, id: &str) -> Result<UrlMapping, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
