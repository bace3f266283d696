//! Comment repository for database operations.

use sqlx::SqlitePool;

use quillpress_core::{PostId, UserId};

use super::RepositoryError;
use crate::models::{Comment, CommentWithAuthor};

/// Repository for comment database operations.
pub struct CommentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepository<'a> {
    /// Create a new comment repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List a post's comments with their authors, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_post(
        &self,
        post_id: PostId,
    ) -> Result<Vec<CommentWithAuthor>, RepositoryError> {
        let comments = sqlx::query_as::<_, CommentWithAuthor>(
            r"
            SELECT c.id, c.text, c.created_at,
                   u.name AS author_name, u.email AS author_email
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = ?1
            ORDER BY c.id ASC
            ",
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Attach a new comment to a post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// a missing post or author, surfaced as a foreign-key error).
    pub async fn create(
        &self,
        post_id: PostId,
        author_id: UserId,
        text: &str,
    ) -> Result<Comment, RepositoryError> {
        let comment = sqlx::query_as::<_, Comment>(
            r"
            INSERT INTO comments (text, author_id, post_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, text, author_id, post_id, created_at
            ",
        )
        .bind(text)
        .bind(author_id)
        .bind(post_id)
        .fetch_one(self.pool)
        .await?;

        Ok(comment)
    }

    /// Number of comments on a post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_for_post(&self, post_id: PostId) -> Result<i64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = ?1")
                .bind(post_id)
                .fetch_one(self.pool)
                .await?;
        Ok(count)
    }
}
