mod common;

use sqlx::PgPool;
use std::sync::Arc;
use user_directory::domain::repositories::{UserFilter, UserRepository};
use user_directory::infrastructure::persistence::PgUserRepository;

async fn seed(pool: &PgPool) {
    common::insert_user(pool, "Alice Smith", "alice@example.com", "555-0001").await;
    common::insert_user(pool, "Bob Jones", "bob.alice@example.com", "555-0002").await;
    common::insert_user(pool, "Carol White", "carol@example.com", "555-0003").await;
    common::insert_user(pool, "Dan 100%_Real", "dan@example.com", "").await;
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_list_without_filter_orders_by_id(pool: PgPool) {
    seed(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let users = repo.list(&UserFilter::default(), 50, 0).await.unwrap();

    assert_eq!(users.len(), 4);
    assert!(users.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(users[0].name, "Alice Smith");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_search_matches_name_or_email(pool: PgPool) {
    seed(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));
    let filter = UserFilter::new("alice");

    let users = repo.list(&filter, 50, 0).await.unwrap();
    let total = repo.count(&filter).await.unwrap();

    assert_eq!(total, 2);
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Smith", "Bob Jones"]);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_search_is_case_insensitive(pool: PgPool) {
    seed(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let total = repo.count(&UserFilter::new("CAROL")).await.unwrap();

    assert_eq!(total, 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_wildcards_match_literally(pool: PgPool) {
    seed(&pool).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    assert_eq!(repo.count(&UserFilter::new("%")).await.unwrap(), 1);
    assert_eq!(repo.count(&UserFilter::new("_")).await.unwrap(), 1);
    assert_eq!(repo.count(&UserFilter::new("0%_r")).await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_limit_and_offset(pool: PgPool) {
    for i in 1..=120 {
        common::insert_user(&pool, &format!("User {i}"), &format!("user{i}@example.com"), "")
            .await;
    }
    let repo = PgUserRepository::new(Arc::new(pool));

    let page = repo.list(&UserFilter::default(), 50, 100).await.unwrap();
    let past_end = repo.list(&UserFilter::default(), 50, 150).await.unwrap();

    assert_eq!(page.len(), 20);
    assert_eq!(page[0].name, "User 101");
    assert!(past_end.is_empty());
    assert_eq!(repo.count(&UserFilter::default()).await.unwrap(), 120);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_empty_table(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(
        repo.list(&UserFilter::default(), 50, 0)
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(repo.count(&UserFilter::default()).await.unwrap(), 0);
}
