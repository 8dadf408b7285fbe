#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use user_directory::application::services::{DEFAULT_CACHE_TTL, UserService};
use user_directory::domain::entities::User;
use user_directory::domain::repositories::{UserFilter, UserRepository};
use user_directory::error::AppError;
use user_directory::infrastructure::cache::{CacheService, MemoryCache};
use user_directory::routes::router;
use user_directory::state::AppState;

/// In-memory stand-in for the users table.
///
/// Matches the search term case-insensitively against name or email, orders
/// by id, and counts every call so tests can tell whether storage was hit.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Vec<User>,
    list_calls: AtomicUsize,
    count_calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn with_users(mut users: Vec<User>) -> Self {
        users.sort_by_key(|u| u.id);
        Self {
            users,
            ..Default::default()
        }
    }

    /// Total number of storage round trips so far.
    pub fn queries(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst) + self.count_calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent call fail as if the database were down.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::unavailable("Database unavailable", json!({})))
        } else {
            Ok(())
        }
    }

    fn matching(&self, filter: &UserFilter) -> impl Iterator<Item = &User> {
        let term = filter.search.as_deref().map(str::to_lowercase);
        self.users.iter().filter(move |u| match &term {
            Some(term) => {
                u.name.to_lowercase().contains(term) || u.email.to_lowercase().contains(term)
            }
            None => true,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(
        &self,
        filter: &UserFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .matching(filter)
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &UserFilter) -> Result<i64, AppError> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.matching(filter).count() as i64)
    }
}

/// `n` users with ids `1..=n`.
pub fn numbered_users(n: i64) -> Vec<User> {
    (1..=n)
        .map(|i| {
            User::new(
                i,
                format!("User {i}"),
                format!("user{i}@example.com"),
                format!("555-{i:04}"),
            )
        })
        .collect()
}

pub fn create_test_state(
    repository: Arc<InMemoryUserRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let user_service = Arc::new(UserService::new(
        repository,
        cache.clone(),
        DEFAULT_CACHE_TTL,
    ));
    AppState::new(user_service, cache)
}

/// Test server over the full router with an in-memory cache.
pub fn create_test_server(repository: Arc<InMemoryUserRepository>) -> TestServer {
    let state = create_test_state(repository, Arc::new(MemoryCache::new()));
    TestServer::new(router(state)).unwrap()
}

pub async fn insert_user(pool: &PgPool, name: &str, email: &str, phone: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email, phone) VALUES ($1, $2, $3) RETURNING id")
        .bind(name)
        .bind(email)
        .bind(phone)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Number of user rows in a rendered listing page.
pub fn row_count(html: &str) -> usize {
    html.matches("data-user-id=").count()
}
