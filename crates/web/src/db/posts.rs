//! Post repository for database operations.

use sqlx::SqlitePool;

use quillpress_core::{PostId, UserId};

use super::RepositoryError;
use crate::models::{Post, PostDraft, PostWithAuthor};

/// Repository for post database operations.
pub struct PostRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every post with its author's display name, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_authors(&self) -> Result<Vec<PostWithAuthor>, RepositoryError> {
        let posts = sqlx::query_as::<_, PostWithAuthor>(
            r"
            SELECT p.id, p.author_id, p.title, p.subtitle, p.date, p.body, p.img_url,
                   u.name AS author_name
            FROM posts p
            JOIN users u ON u.id = p.author_id
            ORDER BY p.id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a post by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r"
            SELECT id, author_id, title, subtitle, date, body, img_url
            FROM posts
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// Get a post by its ID, joined with the author's display name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_author(
        &self,
        id: PostId,
    ) -> Result<Option<PostWithAuthor>, RepositoryError> {
        let post = sqlx::query_as::<_, PostWithAuthor>(
            r"
            SELECT p.id, p.author_id, p.title, p.subtitle, p.date, p.body, p.img_url,
                   u.name AS author_name
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// Create a new post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the title is already taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        author_id: UserId,
        draft: &PostDraft,
        date: &str,
    ) -> Result<Post, RepositoryError> {
        sqlx::query_as::<_, Post>(
            r"
            INSERT INTO posts (author_id, title, subtitle, date, body, img_url)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, author_id, title, subtitle, date, body, img_url
            ",
        )
        .bind(author_id)
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(date)
        .bind(&draft.body)
        .bind(&draft.img_url)
        .fetch_one(self.pool)
        .await
        .map_err(map_title_conflict)
    }

    /// Update a post's editable fields in place.
    ///
    /// The publication date and author are never touched by edits.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the post doesn't exist.
    /// Returns `RepositoryError::Conflict` if the new title is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: PostId, draft: &PostDraft) -> Result<Post, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r"
            UPDATE posts
            SET title = ?1, subtitle = ?2, body = ?3, img_url = ?4
            WHERE id = ?5
            RETURNING id, author_id, title, subtitle, date, body, img_url
            ",
        )
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(&draft.body)
        .bind(&draft.img_url)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_title_conflict)?;

        post.ok_or(RepositoryError::NotFound)
    }

    /// Delete a post by its ID.
    ///
    /// Comments on the post are removed by the store's cascade.
    ///
    /// # Returns
    ///
    /// Returns `true` if the post was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: PostId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Map a unique-constraint failure on the title column to `Conflict`.
fn map_title_conflict(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict("post title already exists".to_owned());
    }
    RepositoryError::Database(e)
}
