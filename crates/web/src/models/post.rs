//! Post domain types.

use sqlx::FromRow;

use quillpress_core::{PostId, UserId};

/// A blog post row.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: PostId,
    /// Author reference (always the administrator).
    pub author_id: UserId,
    /// Post title, unique across the site.
    pub title: String,
    pub subtitle: String,
    /// Publication date as a display string, e.g. "June 03, 2024".
    pub date: String,
    /// Rich-text body, rendered unescaped.
    pub body: String,
    /// Header image URL.
    pub img_url: String,
}

/// A post joined with its author's display name, for rendering.
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthor {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
    pub author_name: String,
}

/// The editable fields of a post, as submitted through the post form.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
}

impl PostDraft {
    /// Whether every field survived trimming.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !(self.title.is_empty()
            || self.subtitle.is_empty()
            || self.body.is_empty()
            || self.img_url.is_empty())
    }
}
