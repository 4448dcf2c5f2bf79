//! Utility functions for id generation and URL validation.
//!
//! - [`id_generator`] - Random short id generation and format checks
//! - [`url_validator`] - HTTP(S) URL validation

pub mod id_generator;
pub mod url_validator;
