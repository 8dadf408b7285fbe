mod common;

use axum::http::StatusCode;
use std::sync::Arc;
use user_directory::domain::entities::User;

use common::{InMemoryUserRepository, create_test_server, numbered_users, row_count};

fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Alice Smith", "alice@example.com", "555-0001"),
        User::new(2, "Bob Jones", "bob.alice@example.com", "555-0002"),
        User::new(3, "Carol White", "carol@example.com", "555-0003"),
    ]
}

#[tokio::test]
async fn test_root_redirects_to_listing() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::default()));

    let response = server.get("/").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/users");
}

#[tokio::test]
async fn test_lists_all_users_in_id_order() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        sample_users(),
    )));

    let response = server.get("/users").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(row_count(&html), 3);
    let alice = html.find("alice@example.com").unwrap();
    let bob = html.find("bob.alice@example.com").unwrap();
    let carol = html.find("carol@example.com").unwrap();
    assert!(alice < bob && bob < carol);
    assert!(html.contains("Page 1 of 1"));
}

#[tokio::test]
async fn test_search_matches_name_or_email() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        sample_users(),
    )));

    let html = server.get("/users?search=alice").await.text();

    assert_eq!(row_count(&html), 2);
    assert!(html.contains("Alice Smith"));
    assert!(html.contains("Bob Jones"));
    assert!(!html.contains("Carol White"));
    assert!(html.contains("value=\"alice\""));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        sample_users(),
    )));

    let html = server.get("/users?search=CAROL").await.text();

    assert_eq!(row_count(&html), 1);
    assert!(html.contains("Carol White"));
}

#[tokio::test]
async fn test_last_partial_page() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        numbered_users(120),
    )));

    let html = server.get("/users?page=3").await.text();

    assert_eq!(row_count(&html), 20);
    assert!(html.contains("data-user-id=\"101\""));
    assert!(html.contains("data-user-id=\"120\""));
    assert!(!html.contains("data-user-id=\"100\""));
    assert!(html.contains("Page 3 of 3"));
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        numbered_users(120),
    )));

    let response = server.get("/users?page=4").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(row_count(&html), 0);
    assert!(html.contains("No users found."));
    assert!(html.contains("Page 4 of 3"));
}

#[tokio::test]
async fn test_malformed_page_falls_back_to_first() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        numbered_users(120),
    )));

    for page in ["abc", "-1", "0", ""] {
        let response = server.get(&format!("/users?page={page}")).await;

        response.assert_status_ok();
        let html = response.text();
        assert_eq!(row_count(&html), 50, "page={page}");
        assert!(html.contains("data-user-id=\"1\""), "page={page}");
        assert!(html.contains("Page 1 of 3"), "page={page}");
    }
}

#[tokio::test]
async fn test_repeated_page_parameter_uses_last_value() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        numbered_users(120),
    )));

    let response = server.get("/users?page=2&page=3").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(row_count(&html), 20);
    assert!(html.contains("Page 3 of 3"));
}

#[tokio::test]
async fn test_repeated_search_parameter_uses_last_value() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        sample_users(),
    )));

    let response = server.get("/users?search=alice&search=carol").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(row_count(&html), 1);
    assert!(html.contains("Carol White"));
    assert!(html.contains("value=\"carol\""));
}

#[tokio::test]
async fn test_repeated_request_is_served_from_cache() {
    let repository = Arc::new(InMemoryUserRepository::with_users(sample_users()));
    let server = create_test_server(repository.clone());

    let first = server.get("/users?search=alice").await.text();
    let after_first = repository.queries();
    assert!(after_first > 0);

    let second = server.get("/users?search=alice").await.text();

    assert_eq!(repository.queries(), after_first);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_different_pages_are_cached_separately() {
    let repository = Arc::new(InMemoryUserRepository::with_users(numbered_users(120)));
    let server = create_test_server(repository.clone());

    server.get("/users?page=1").await.assert_status_ok();
    let after_first = repository.queries();

    let html = server.get("/users?page=2").await.text();

    assert!(repository.queries() > after_first);
    assert!(html.contains("data-user-id=\"51\""));
}

#[tokio::test]
async fn test_cached_page_survives_storage_outage() {
    let repository = Arc::new(InMemoryUserRepository::with_users(sample_users()));
    let server = create_test_server(repository.clone());

    server.get("/users").await.assert_status_ok();
    repository.fail();

    let response = server.get("/users").await;

    response.assert_status_ok();
    assert_eq!(row_count(&response.text()), 3);
}

#[tokio::test]
async fn test_storage_failure_returns_json_error() {
    let repository = Arc::new(InMemoryUserRepository::with_users(sample_users()));
    repository.fail();
    let server = create_test_server(repository);

    let response = server.get("/users").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let text = response.text();
    assert!(!text.contains("<table"));

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "service_unavailable");
    assert!(json["error"]["message"].is_string());
}

#[tokio::test]
async fn test_pagination_links_preserve_search() {
    let users = (1..=60)
        .map(|i| User::new(i, format!("Alice {i}"), format!("a{i}@example.com"), ""))
        .collect();
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(users)));

    let html = server.get("/users?search=alice").await.text();

    assert!(html.contains("/users?search=alice&amp;page=2"));
    assert!(html.contains("Page 1 of 2"));
}

#[tokio::test]
async fn test_search_term_with_spaces_is_encoded_in_links() {
    let users = (1..=60)
        .map(|i| User::new(i, format!("Mary Ann {i}"), format!("m{i}@example.com"), ""))
        .collect();
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(users)));

    let html = server.get("/users?search=mary%20ann").await.text();

    assert_eq!(row_count(&html), 50);
    assert!(html.contains("/users?search=mary+ann&amp;page=2"));
}

#[tokio::test]
async fn test_no_matches_shows_empty_listing() {
    let server = create_test_server(Arc::new(InMemoryUserRepository::with_users(
        sample_users(),
    )));

    let response = server.get("/users?search=nobody").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(row_count(&html), 0);
    assert!(html.contains("No users found."));
    assert!(html.contains("Page 1 of 0"));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;
    use user_directory::infrastructure::cache::MemoryCache;
    use user_directory::routes::app_router;

    let state = common::create_test_state(
        Arc::new(InMemoryUserRepository::with_users(sample_users())),
        Arc::new(MemoryCache::new()),
    );

    let response = app_router(state)
        .oneshot(Request::get("/users/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
