//! End-to-end authentication flow tests.

mod support;

use axum::http::StatusCode;

use support::{login, logout, register, test_server, user_count};

#[tokio::test]
async fn registering_logs_the_user_in() {
    let (server, pool) = test_server().await;

    let response = register(&server, "Ada", "ada@example.com", "password123").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");

    assert_eq!(user_count(&pool).await, 1);

    let home = server.get("/").await;
    home.assert_status_ok();
    assert!(home.text().contains("Log Out (Ada)"));
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_sent_to_login() {
    let (server, pool) = test_server().await;

    register(&server, "Ada", "ada@example.com", "password123").await;
    logout(&server).await;

    let response = register(&server, "Imposter", "ada@example.com", "password123").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/login");

    // No duplicate row was written
    assert_eq!(user_count(&pool).await, 1);

    // The flash shows up exactly once on the login page
    let login_page = server.get("/login").await;
    login_page.assert_status_ok();
    assert!(login_page.text().contains("log in instead"));

    let login_page_again = server.get("/login").await;
    assert!(!login_page_again.text().contains("log in instead"));
}

#[tokio::test]
async fn login_establishes_session_with_matching_identity() {
    let (server, _pool) = test_server().await;

    register(&server, "Ada", "ada@example.com", "password123").await;
    logout(&server).await;

    let response = login(&server, "ada@example.com", "password123").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");

    let home = server.get("/").await;
    assert!(home.text().contains("Log Out (Ada)"));
}

#[tokio::test]
async fn wrong_password_never_establishes_a_session() {
    let (server, _pool) = test_server().await;

    register(&server, "Ada", "ada@example.com", "password123").await;
    logout(&server).await;

    let response = login(&server, "ada@example.com", "not-the-password").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/login");

    let login_page = server.get("/login").await;
    assert!(login_page.text().contains("Wrong password"));

    let home = server.get("/").await;
    assert!(!home.text().contains("Log Out"));
    assert!(home.text().contains("Log In"));
}

#[tokio::test]
async fn unknown_email_is_flashed() {
    let (server, _pool) = test_server().await;

    let response = login(&server, "nobody@example.com", "password123").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/login");

    let login_page = server.get("/login").await;
    assert!(login_page.text().contains("register instead"));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let (server, _pool) = test_server().await;

    register(&server, "Ada", "ada@example.com", "password123").await;

    let response = server.get("/logout").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");

    let home = server.get("/").await;
    assert!(!home.text().contains("Log Out"));
}
