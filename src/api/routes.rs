//! JSON route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Operational endpoints.
///
/// # Endpoints
///
/// - `GET /health` - Database and cache status
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
