//! Comment domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use quillpress_core::{CommentId, Email, PostId, UserId};

/// A comment row.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    /// Unique comment ID.
    pub id: CommentId,
    /// Comment text, plain.
    pub text: String,
    /// Author reference.
    pub author_id: UserId,
    /// Parent post reference.
    pub post_id: PostId,
    /// When the comment was left.
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author, for rendering.
///
/// The author email feeds the avatar filter; it is hashed before it
/// reaches any page.
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthor {
    pub id: CommentId,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
    pub author_email: Email,
}
