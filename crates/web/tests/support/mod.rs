//! Shared test harness: the full application router in front of a fresh
//! in-memory database, with cookies preserved across requests so login
//! sessions behave like a browser's.

#![allow(dead_code)]

use std::str::FromStr;

use axum::Router;
use axum_test::{TestResponse, TestServer};
use secrecy::SecretString;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_sessions_sqlx_store::SqliteStore;

use quillpress_web::config::AppConfig;
use quillpress_web::middleware::create_session_layer;
use quillpress_web::routes;
use quillpress_web::state::AppState;

/// Session secret for tests; long enough to derive a signing key from.
const TEST_SESSION_SECRET: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

fn test_config() -> AppConfig {
    AppConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        session_secret: SecretString::from(TEST_SESSION_SECRET),
        sentry_dsn: None,
    }
}

/// Build a test server backed by a fresh in-memory database.
///
/// The pool is capped at a single connection: every connection to
/// `sqlite::memory:` is its own database, so a second one would see
/// nothing the first wrote.
pub async fn test_server() -> (TestServer, SqlitePool) {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("connect to in-memory sqlite");

    sqlx::migrate!().run(&pool).await.expect("run migrations");

    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await.expect("set up session store");

    let config = test_config();
    let session_layer = create_session_layer(session_store, &config).expect("session layer");

    let app = Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .with_state(AppState::new(config, pool.clone()));

    let server = TestServer::builder()
        .save_cookies()
        .build(app)
        .expect("build test server");

    (server, pool)
}

/// Submit the registration form.
pub async fn register(
    server: &TestServer,
    name: &str,
    email: &str,
    password: &str,
) -> TestResponse {
    server
        .post("/register")
        .form(&[("name", name), ("email", email), ("password", password)])
        .await
}

/// Submit the login form.
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .form(&[("email", email), ("password", password)])
        .await
}

/// Drop the current session.
pub async fn logout(server: &TestServer) {
    server.get("/logout").await;
}

/// Submit the new-post form.
pub async fn create_post(server: &TestServer, title: &str, subtitle: &str) -> TestResponse {
    server
        .post("/new-post")
        .form(&[
            ("title", title),
            ("subtitle", subtitle),
            ("img_url", "https://images.example.com/header.jpg"),
            ("body", "<p>Some body text.</p>"),
        ])
        .await
}

/// Number of rows in the posts table.
pub async fn post_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
        .expect("count posts")
}

/// Number of rows in the comments table.
pub async fn comment_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await
        .expect("count comments")
}

/// Number of rows in the users table.
pub async fn user_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("count users")
}
