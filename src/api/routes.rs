//! API route configuration.

use crate::api::handlers::{get_url_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL mapping routes.
///
/// # Endpoints
///
/// - `POST /url`      - Shorten a URL
/// - `GET  /url/{id}` - Look up the URL behind a short id
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(shorten_handler))
        .route("/url/{id}", get(get_url_handler))
}
