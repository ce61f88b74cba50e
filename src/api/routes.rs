//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, shorten_handler, stats_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST   /shorten`              - Create a short link
/// - `PUT    /shorten/{shortCode}`  - Replace the target URL
/// - `DELETE /shorten/{shortCode}`  - Delete a link
/// - `GET    /stats/{shortCode}`    - Link with visit count
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/shorten/{short_code}",
            put(update_link_handler).delete(delete_link_handler),
        )
        .route("/stats/{short_code}", get(stats_handler))
}
