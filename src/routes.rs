//! Top-level router configuration combining HTML and JSON routes.
//!
//! # Route Structure
//!
//! - `GET /`        - Redirect to the listing
//! - `GET /users`   - Paginated, searchable user listing
//! - `GET /health`  - Health check: DB and cache
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with state and tracing applied.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] wrapped so that
/// `/users/` and `/users` resolve to the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
