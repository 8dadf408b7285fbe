//! Repository trait for user listing queries.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for user queries.
///
/// All criteria are combined with `AND`. The free-text search is a single
/// criterion that matches either the name or the email, so implementations
/// must keep its two branches grouped together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: Option<String>,
}

impl UserFilter {
    /// Creates a filter from a raw search term. An empty term means no filter.
    pub fn new(search: &str) -> Self {
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Returns the `LIKE` pattern for the search term, if any.
    ///
    /// `\`, `%` and `_` in the term are escaped with `\` so the term only
    /// ever matches as a literal substring.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for ch in term.chars() {
                if matches!(ch, '\\' | '%' | '_') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }
}

/// Repository interface for reading users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists users matching `filter`, ordered by id.
    ///
    /// # Arguments
    ///
    /// - `filter` - Search criteria
    /// - `limit` - Maximum number of users to return
    /// - `offset` - Number of matching users to skip
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on database errors.
    async fn list(
        &self,
        filter: &UserFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, AppError>;

    /// Counts users matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on database errors.
    async fn count(&self, filter: &UserFilter) -> Result<i64, AppError>;
}
