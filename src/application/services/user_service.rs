//! User listing service with read-through caching.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::entities::UserPage;
use crate::domain::repositories::{UserFilter, UserRepository};
use crate::domain::user_query::UserQuery;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Default lifetime of a cached listing page.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

/// Service for listing users page by page.
///
/// Each page is cached under a key derived from the search term and page
/// number. Cached pages are served as-is until they expire; there is no
/// invalidation when the underlying rows change.
///
/// The cache is best-effort: read or write failures are logged and the
/// request is answered from the database. Database failures are returned to
/// the caller.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    cache: Arc<dyn CacheService>,
    cache_ttl: Duration,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: Arc<dyn CacheService>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            cache_ttl,
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Returns one page of users matching the query.
    ///
    /// # Flow
    ///
    /// 1. Look up the query's cache key
    /// 2. On hit, return the cached page without touching the database
    /// 3. On miss (or unreadable cache), query rows and count concurrently
    /// 4. Store the fresh page with the configured TTL
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] when the
    /// database query fails. Cache failures are never returned.
    pub async fn list_users(&self, query: &UserQuery) -> Result<UserPage, AppError> {
        let cache_key = query.cache_key();

        match self.cache.get(&cache_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<UserPage>(&raw) {
                Ok(page) => {
                    debug!(cache_key, "Listing cache HIT");
                    return Ok(page);
                }
                Err(e) => {
                    warn!(error = %e, cache_key, "Discarding unreadable cache entry");
                }
            },
            Ok(None) => {
                debug!(cache_key, "Listing cache MISS");
            }
            Err(e) => {
                warn!(
                    error = %e,
                    backend = self.cache.backend(),
                    "Cache unavailable, reading from database"
                );
            }
        }

        let page = self.fetch_page(query).await?;

        match serde_json::to_string(&page) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(&cache_key, &raw, self.cache_ttl).await {
                    warn!(error = %e, cache_key, "Failed to cache listing page");
                }
            }
            Err(e) => warn!(error = %e, cache_key, "Failed to serialize listing page"),
        }

        Ok(page)
    }

    /// Queries the database for one page, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on database errors.
    pub async fn fetch_page(&self, query: &UserQuery) -> Result<UserPage, AppError> {
        let filter = query.filter();
        let limit = to_sql_int(query.limit());
        let offset = to_sql_int(query.offset());

        let (users, total) = tokio::try_join!(
            self.repository.list(&filter, limit, offset),
            self.repository.count(&filter)
        )?;

        Ok(UserPage::new(
            users,
            u64::try_from(total).unwrap_or(0),
            query.page(),
            query.limit(),
        ))
    }

    /// Counts all users. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on database errors.
    pub async fn count_all(&self) -> Result<i64, AppError> {
        self.repository.count(&UserFilter::default()).await
    }
}

/// Converts a pagination value to a SQL `BIGINT`, saturating at `i64::MAX`.
fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
