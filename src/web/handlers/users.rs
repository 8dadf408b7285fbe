//! User listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};

use crate::domain::entities::UserPage;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::pagination::PaginationView;
use crate::web::params::ListingParams;

/// Path the listing is served from; the search form and page links point here.
pub const USERS_PATH: &str = "/users";

/// Template for the user listing page.
///
/// Renders `templates/users.html` with:
/// - Search form pre-filled with the current term
/// - One table row per user on the current page
/// - Pagination controls that keep the search term
#[derive(Template, WebTemplate)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    pub action: &'static str,
    pub search: String,
    pub page: UserPage,
    pub pagination: PaginationView,
}

impl UsersTemplate {
    pub fn new(page: UserPage, search: &str) -> Self {
        let pagination = PaginationView::new(&page, search, USERS_PATH);
        Self {
            action: USERS_PATH,
            search: search.to_string(),
            page,
            pagination,
        }
    }
}

/// Renders one page of the user directory.
///
/// # Endpoint
///
/// `GET /users?search=<term>&page=<n>`
///
/// # Query Parameters
///
/// - `search` - case-insensitive substring matched against name or email
/// - `page` - 1-based page number; malformed values fall back to 1
///
/// A repeated parameter takes its last value.
///
/// # Errors
///
/// Storage failures are returned as a JSON error response; no partial page
/// is rendered.
pub async fn users_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<UsersTemplate, AppError> {
    let query = ListingParams::from_pairs(pairs).into_query();

    tracing::debug!(search = %query.search(), page = query.page(), "Listing users");

    let page = state.user_service.list_users(&query).await?;

    Ok(UsersTemplate::new(page, query.search()))
}
