//! Blog post route handlers.
//!
//! The public listing and detail pages, comment submission, and the
//! admin-only post management routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use quillpress_core::PostId;

use crate::db::{CommentRepository, PostRepository, RepositoryError};
use crate::error::AppError;
use crate::filters;
use crate::middleware::{OptionalUser, RequireAdmin, push_flash, take_flash};
use crate::models::{CommentWithAuthor, CurrentUser, PostDraft, PostWithAuthor};
use crate::routes::found;
use crate::state::AppState;

/// Format for the human-readable publication date, e.g. "June 03, 2024".
const DATE_FORMAT: &str = "%B %d, %Y";

// =============================================================================
// Form Types
// =============================================================================

/// Post form data (shared by the new and edit forms).
#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}

impl PostForm {
    /// Trim every field into a draft.
    fn into_draft(self) -> PostDraft {
        PostDraft {
            title: self.title.trim().to_owned(),
            subtitle: self.subtitle.trim().to_owned(),
            body: self.body.trim().to_owned(),
            img_url: self.img_url.trim().to_owned(),
        }
    }
}

/// Comment form data.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub text: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Post list page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<PostWithAuthor>,
    pub current_user: Option<CurrentUser>,
    pub flash: Vec<String>,
}

/// Post detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub post: PostWithAuthor,
    pub comments: Vec<CommentWithAuthor>,
    pub current_user: Option<CurrentUser>,
    pub flash: Vec<String>,
}

/// Shared new/edit post form template.
#[derive(Template, WebTemplate)]
#[template(path = "posts/form.html")]
pub struct PostFormTemplate {
    pub heading: &'static str,
    pub draft: PostDraft,
    pub current_user: Option<CurrentUser>,
    pub flash: Vec<String>,
}

// =============================================================================
// Public Routes
// =============================================================================

/// Display the post list.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    OptionalUser(current_user): OptionalUser,
) -> Result<IndexTemplate, AppError> {
    let posts = PostRepository::new(state.pool()).list_with_authors().await?;

    Ok(IndexTemplate {
        posts,
        current_user,
        flash: take_flash(&session).await,
    })
}

/// Display a single post with its comments.
///
/// # Errors
///
/// Returns 404 if the post doesn't exist.
#[instrument(skip_all, fields(post_id = post_id))]
pub async fn show(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    session: Session,
    OptionalUser(current_user): OptionalUser,
) -> Result<PostTemplate, AppError> {
    let id = PostId::new(post_id);

    let post = PostRepository::new(state.pool())
        .get_with_author(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {post_id}")))?;

    let comments = CommentRepository::new(state.pool()).list_for_post(id).await?;

    Ok(PostTemplate {
        post,
        comments,
        current_user,
        flash: take_flash(&session).await,
    })
}

/// Handle a comment submission on a post.
///
/// Anonymous visitors are bounced to the login page; nothing is stored
/// for them.
#[instrument(skip_all, fields(post_id = post_id))]
pub async fn comment(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    session: Session,
    OptionalUser(current_user): OptionalUser,
    Form(form): Form<CommentForm>,
) -> Result<Response, AppError> {
    let id = PostId::new(post_id);

    if PostRepository::new(state.pool()).get(id).await?.is_none() {
        return Err(AppError::NotFound(format!("post {post_id}")));
    }

    let Some(user) = current_user else {
        push_flash(&session, "Log in first!").await?;
        return Ok(found("/login"));
    };

    let text = form.text.trim();
    if text.is_empty() {
        push_flash(&session, "Comments can't be empty.").await?;
        return Ok(found(&format!("/post/{post_id}")));
    }

    CommentRepository::new(state.pool())
        .create(id, user.id, text)
        .await?;

    Ok(found(&format!("/post/{post_id}")))
}

// =============================================================================
// Admin Routes
// =============================================================================

/// Display the new-post form.
#[instrument(skip_all)]
pub async fn new_post_page(
    session: Session,
    RequireAdmin(admin): RequireAdmin,
) -> PostFormTemplate {
    PostFormTemplate {
        heading: "New Post",
        draft: PostDraft::default(),
        current_user: Some(admin),
        flash: take_flash(&session).await,
    }
}

/// Handle new-post form submission.
#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    RequireAdmin(admin): RequireAdmin,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let draft = form.into_draft();
    if !draft.is_complete() {
        push_flash(&session, "All fields are required.").await?;
        return Ok(found("/new-post"));
    }

    let date = Utc::now().format(DATE_FORMAT).to_string();

    match PostRepository::new(state.pool())
        .create(admin.id, &draft, &date)
        .await
    {
        Ok(_) => Ok(found("/")),
        Err(RepositoryError::Conflict(_)) => {
            push_flash(&session, "A post with that title already exists.").await?;
            Ok(found("/new-post"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Display the edit form pre-populated from an existing post.
///
/// # Errors
///
/// Returns 404 if the post doesn't exist.
#[instrument(skip_all, fields(post_id = post_id))]
pub async fn edit_post_page(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    session: Session,
    RequireAdmin(admin): RequireAdmin,
) -> Result<PostFormTemplate, AppError> {
    let post = PostRepository::new(state.pool())
        .get(PostId::new(post_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {post_id}")))?;

    Ok(PostFormTemplate {
        heading: "Edit Post",
        draft: PostDraft {
            title: post.title,
            subtitle: post.subtitle,
            body: post.body,
            img_url: post.img_url,
        },
        current_user: Some(admin),
        flash: take_flash(&session).await,
    })
}

/// Handle edit form submission.
///
/// Mutates title, subtitle, image URL, and body in place; the
/// publication date and author stay as they were.
#[instrument(skip_all, fields(post_id = post_id))]
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    session: Session,
    RequireAdmin(_admin): RequireAdmin,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let draft = form.into_draft();
    if !draft.is_complete() {
        push_flash(&session, "All fields are required.").await?;
        return Ok(found(&format!("/edit-post/{post_id}")));
    }

    match PostRepository::new(state.pool())
        .update(PostId::new(post_id), &draft)
        .await
    {
        Ok(post) => Ok(found(&format!("/post/{}", post.id))),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound(format!("post {post_id}"))),
        Err(RepositoryError::Conflict(_)) => {
            push_flash(&session, "A post with that title already exists.").await?;
            Ok(found(&format!("/edit-post/{post_id}")))
        }
        Err(e) => Err(e.into()),
    }
}

/// Delete a post by its ID.
///
/// Comments on the post go with it.
///
/// # Errors
///
/// Returns 404 if the post doesn't exist.
#[instrument(skip_all, fields(post_id = post_id))]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Response, AppError> {
    let deleted = PostRepository::new(state.pool())
        .delete(PostId::new(post_id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!("post {post_id}")));
    }

    Ok(found("/"))
}
