//! Root path handler.

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use super::users::USERS_PATH;

/// Sends visitors of the root path to the user listing.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// `302 Found` with `Location: /users`.
pub async fn home_handler() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, USERS_PATH)])
}
