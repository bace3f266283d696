//! User domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use quillpress_core::{Email, Role, UserId};

/// A registered account.
///
/// Carries the stored password hash; never hand this to a template.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name shown next to posts and comments.
    pub name: String,
    /// Email address, unique per account.
    pub email: Email,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Capability role; the first registered account is the admin.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
