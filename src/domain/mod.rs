//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`id_generator`] - Short id generation trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure and utils layers
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod id_generator;
pub mod repositories;

pub use id_generator::IdGenerator;

#[cfg(test)]
pub use id_generator::MockIdGenerator;
