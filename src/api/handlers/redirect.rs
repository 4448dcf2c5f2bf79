//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Resolution goes through the same cache-then-store path as `GET /url/{id}`.
/// Header values must be ASCII, so a stored URL with non-ASCII characters is
/// sent in its percent-encoded form.
///
/// # Errors
///
/// Returns 404 Not Found if the id was never issued.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.url_service.resolve(&id).await?;

    Ok(Redirect::temporary(&location(&url)?))
}

fn location(url: &str) -> Result<String, AppError> {
    if url.is_ascii() {
        return Ok(url.to_string());
    }

    Url::parse(url).map(String::from).map_err(|e| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "reason": e.to_string() }),
        )
    })
}
