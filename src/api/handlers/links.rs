//! Handlers for link management endpoints (update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::link::LinkResponse;
use crate::api::dto::update_link::UpdateLinkRequest;
use crate::api::extractors::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Points a short link at a new URL.
///
/// # Endpoint
///
/// `PUT /shorten/{shortCode}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://new-destination.com" }
/// ```
///
/// The short code and creation time are kept; `updatedAt` is refreshed.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 400 Bad Request if the body is not valid JSON or `url` is
/// missing or empty.
pub async fn update_link_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.update(&short_code, payload.url).await?;

    Ok(Json(link.into()))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /shorten/{shortCode}`
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&short_code).await?;

    Ok(StatusCode::NO_CONTENT)
}
