//! Cache service trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value store with per-entry expiry, used to hold rendered listing pages.
///
/// Implementations report failures as [`CacheError`]; callers decide whether a
/// failure is fatal. The listing service treats every cache error as a miss
/// and falls back to the database.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache shared across instances
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache for single-instance deployments
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a value by key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss or expired entry
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend cannot be reached.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value that expires after `ttl`.
    ///
    /// Overwrites any existing value for the same key.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend cannot be reached.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Removes every entry owned by this service and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backend cannot be reached.
    async fn purge(&self) -> CacheResult<u64>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
