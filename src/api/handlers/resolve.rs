//! Handler for short code resolution.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code to its link and counts the visit.
///
/// # Endpoint
///
/// `GET /{shortCode}`
///
/// Every successful call increments the visit counter by one, including
/// repeated or automated lookups.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn resolve_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.resolve(&short_code).await?;

    Ok(Json(link.into()))
}
