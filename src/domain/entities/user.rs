//! User entity and the paginated listing built from it.

use serde::{Deserialize, Serialize};

/// A user record as exposed by the directory.
///
/// Read-only projection of the `users` table. The service never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// One page of a user listing with its pagination metadata.
///
/// Built fresh from storage on a cache miss, or deserialized unchanged from
/// the cache on a hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
    /// Number of users matching the query across all pages.
    pub total: u64,
    /// Current page number (1-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl UserPage {
    /// Assembles a page and derives `total_pages` from `total` and `per_page`.
    pub fn new(users: Vec<User>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            users,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// 1-based position of the first user on this page, or 0 when empty.
    pub fn first_item(&self) -> u64 {
        if self.users.is_empty() {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-based position of the last user on this page, or 0 when empty.
    pub fn last_item(&self) -> u64 {
        if self.users.is_empty() {
            0
        } else {
            self.first_item() + self.users.len() as u64 - 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
