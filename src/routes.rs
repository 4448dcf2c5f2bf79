//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`       - Shorten a URL (rate limited)
//! - `GET  /url/{id}`  - Resolve a short id to JSON (rate limited)
//! - `GET  /{id}`      - Redirect to the original URL
//! - `GET  /health`    - Health check: store and cache
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the URL API

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `limits` - per-IP limits for the URL API; `None` disables limiting.
///   The limiter keys on the peer address, so it needs `ConnectInfo`.
///
/// Trailing-slash normalisation is applied by the server around this router.
pub fn app_router(state: AppState, limits: Option<RateLimit>) -> Router {
    let url_router = match limits {
        Some(limit) => api::routes::url_routes().layer(rate_limit::layer(limit)),
        None => api::routes::url_routes(),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
        .merge(url_router)
        .with_state(state)
        .layer(tracing::layer())
}
