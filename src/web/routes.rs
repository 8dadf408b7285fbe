//! Browser-facing route configuration.

use crate::state::AppState;
use crate::web::handlers::{USERS_PATH, home_handler, users_handler};
use axum::{Router, routing::get};

/// HTML routes.
///
/// # Endpoints
///
/// - `GET /` - Redirects to the listing
/// - `GET /users` - Paginated, searchable user listing
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route(USERS_PATH, get(users_handler))
}
