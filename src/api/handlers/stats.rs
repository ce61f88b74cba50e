//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link together with its visit count.
///
/// # Endpoint
///
/// `GET /stats/{shortCode}`
///
/// Read-only: does not count as a visit.
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://example.com",
///   "shortCode": "aB3xYz",
///   "createdAt": "2024-01-15T10:30:00Z",
///   "updatedAt": "2024-01-15T10:30:00Z",
///   "accessCount": 10
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_stats(&short_code).await?;

    Ok(Json(link.into()))
}
