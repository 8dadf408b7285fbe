//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::{UserFilter, UserRepository};
use crate::error::AppError;

/// Row shape of the `users` projection.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name, row.email, row.phone)
    }
}

/// PostgreSQL repository for user reads.
///
/// Queries are assembled with [`QueryBuilder`] and every value is bound, so
/// the search term never reaches the SQL text.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Appends the `WHERE` clause for `filter`.
///
/// The name/email alternatives form one parenthesized predicate; anything
/// added later must be joined to it with `AND`.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &UserFilter) {
    if let Some(pattern) = filter.search_pattern() {
        builder
            .push(" WHERE (name ILIKE ")
            .push_bind(pattern.clone())
            .push(r" ESCAPE '\' OR email ILIKE ")
            .push_bind(pattern)
            .push(r" ESCAPE '\')");
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(
        &self,
        filter: &UserFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id, name, email, phone FROM users");
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn count(&self, filter: &UserFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM users");
        push_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
