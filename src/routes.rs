//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`               - Health check
//! - `POST   /shorten`              - Create a short link
//! - `PUT    /shorten/{shortCode}`  - Replace the target URL
//! - `DELETE /shorten/{shortCode}`  - Delete a link
//! - `GET    /stats/{shortCode}`    - Link with visit count
//! - `GET    /{shortCode}`          - Resolve and count a visit
//!
//! Fixed segments take priority over the `/{shortCode}` capture, which is why
//! generated codes never equal a reserved segment.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, resolve_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{short_code}", get(resolve_handler))
        .merge(api::routes::link_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped in trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
