//! Comment submission tests.

mod support;

use axum::http::StatusCode;

use support::{comment_count, create_post, login, logout, register, test_server};

#[tokio::test]
async fn anonymous_comments_create_nothing_and_redirect_to_login() {
    let (server, pool) = test_server().await;

    register(&server, "Author", "author@example.com", "password123").await;
    create_post(&server, "Quiet Post", "No anonymous chatter").await;
    logout(&server).await;

    let response = server.post("/post/1").form(&[("text", "hi")]).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/login");

    assert_eq!(comment_count(&pool).await, 0);

    let login_page = server.get("/login").await;
    assert!(login_page.text().contains("Log in first!"));
}

#[tokio::test]
async fn logged_in_reader_comment_appears_attributed() {
    let (server, _pool) = test_server().await;

    // Author sets up the post
    register(&server, "Author", "author@example.com", "password123").await;
    create_post(&server, "Open Thread", "Say anything").await;
    logout(&server).await;

    // Reader registers, views the post, and comments
    register(&server, "Alice", "alice@example.com", "password123").await;

    let post_page = server.get("/post/1").await;
    post_page.assert_status_ok();
    assert!(post_page.text().contains("Open Thread"));

    let response = server.post("/post/1").form(&[("text", "hi")]).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/post/1");

    let post_page = server.get("/post/1").await;
    assert!(post_page.text().contains("<p>hi</p>"));
    assert!(post_page.text().contains("Alice"));
}

#[tokio::test]
async fn reader_can_log_back_in_and_comment() {
    let (server, _pool) = test_server().await;

    register(&server, "Author", "author@example.com", "password123").await;
    create_post(&server, "Welcome Back", "Returning readers").await;
    logout(&server).await;

    register(&server, "Alice", "alice@example.com", "password123").await;
    logout(&server).await;
    login(&server, "alice@example.com", "password123").await;

    let response = server.post("/post/1").form(&[("text", "good to be back")]).await;
    response.assert_status(StatusCode::FOUND);

    let post_page = server.get("/post/1").await;
    assert!(post_page.text().contains("good to be back"));
}

#[tokio::test]
async fn blank_comments_are_rejected() {
    let (server, pool) = test_server().await;

    register(&server, "Author", "author@example.com", "password123").await;
    create_post(&server, "Substance Only", "No empty comments").await;

    let response = server.post("/post/1").form(&[("text", "   ")]).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/post/1");

    assert_eq!(comment_count(&pool).await, 0);

    let post_page = server.get("/post/1").await;
    assert!(post_page.text().contains("Comments can't be empty."));
}

#[tokio::test]
async fn commenting_on_a_missing_post_is_404() {
    let (server, pool) = test_server().await;

    register(&server, "Author", "author@example.com", "password123").await;

    let response = server.post("/post/999").form(&[("text", "hello?")]).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(comment_count(&pool).await, 0);
}
