//! A normalized listing request and the cache key derived from it.

use sha2::{Digest, Sha256};

use crate::domain::repositories::UserFilter;

/// Number of users shown per page. Not configurable per request.
pub const PAGE_SIZE: u64 = 50;

/// Namespace prepended to every listing cache key.
pub const CACHE_KEY_PREFIX: &str = "users:";

/// A listing request after parameter parsing.
///
/// An absent search term is stored as the empty string and the page is
/// always at least 1, so equal requests compare (and hash) equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    search: String,
    page: u64,
}

impl UserQuery {
    pub fn new(search: Option<String>, page: u64) -> Self {
        Self {
            search: search.unwrap_or_default(),
            page: page.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }

    /// Number of rows to skip. Saturates instead of overflowing for huge pages.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }

    pub fn filter(&self) -> UserFilter {
        UserFilter::new(&self.search)
    }

    /// Stable cache key for this (search, page) pair.
    ///
    /// SHA-256 over the search term, a NUL separator and the decimal page
    /// number. The page is always the digits after the last NUL, so distinct
    /// pairs never produce the same hash input.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.search.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.page.to_string().as_bytes());
        format!("{CACHE_KEY_PREFIX}{}", hex::encode(hasher.finalize()))
    }
}
