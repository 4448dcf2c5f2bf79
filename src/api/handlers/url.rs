//! Handlers for the shorten and resolve endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::url::{ShortenUrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://encore.dev" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "5cJpBVRp", "url": "https://encore.dev" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is malformed or the URL is invalid
/// - 500 Internal Server Error if no id could be generated
/// - 503 Service Unavailable if the store is unreachable
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenUrlRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.url_service.shorten(&payload.url).await?;

    Ok(Json(UrlResponse::new(mapping.id, mapping.original_url)))
}

/// Returns the URL stored under a short id.
///
/// # Endpoint
///
/// `GET /url/{id}`
///
/// # Response
///
/// ```json
/// { "id": "5cJpBVRp", "url": "https://encore.dev" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the id was never issued.
pub async fn get_url_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UrlResponse>, AppError> {
    let url = state.url_service.resolve(&id).await?;

    Ok(Json(UrlResponse::new(id, url)))
}
