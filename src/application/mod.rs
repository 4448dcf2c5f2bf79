//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and expose shorten/resolve operations
//! to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL creation and resolution

pub mod services;
