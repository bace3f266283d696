//! Database operations for the Quillpress SQLite store.
//!
//! # Tables
//!
//! - `users` - Registered accounts (display name, email, password hash, role)
//! - `posts` - Blog posts, authored by the administrator
//! - `comments` - Reader comments, attached to a post and an author
//! - `tower_sessions` - Session storage, owned by the session store
//!
//! # Migrations
//!
//! Migrations live in `crates/web/migrations/` and are embedded into the
//! binary with `sqlx::migrate!`; they run at startup.

pub mod comments;
pub mod posts;
pub mod users;

pub use comments::CommentRepository;
pub use posts::PostRepository;
pub use users::UserRepository;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email or post title).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a SQLite connection pool with sensible defaults.
///
/// The database file is created if it does not exist, and foreign key
/// enforcement is switched on for every connection (SQLite leaves it off
/// by default, and the comment cascade depends on it).
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot
/// be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
