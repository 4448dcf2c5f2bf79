//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer and provides
//! the optional resolve cache.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod cache;
pub mod persistence;
