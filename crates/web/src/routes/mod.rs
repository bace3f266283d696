//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Post list
//! GET  /health             - Liveness check (wired in main)
//!
//! # Posts
//! GET  /post/{id}          - Post detail with comments
//! POST /post/{id}          - Leave a comment (requires login)
//!
//! # Post management (admin only, 403 otherwise)
//! GET  /new-post           - New post form
//! POST /new-post           - Create post
//! GET  /edit-post/{id}     - Edit post form
//! POST /edit-post/{id}     - Update post
//! GET  /delete/{id}        - Delete post
//!
//! # Auth
//! GET  /register           - Registration page
//! POST /register           - Register action
//! GET  /login              - Login page
//! POST /login              - Login action
//! GET  /logout             - Logout action
//!
//! # Pages
//! GET  /about              - About page
//! GET  /contact            - Contact page
//! ```

pub mod auth;
pub mod pages;
pub mod posts;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Create the post routes router, including the admin-only management
/// routes.
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::index))
        .route("/post/{id}", get(posts::show).post(posts::comment))
        .route(
            "/new-post",
            get(posts::new_post_page).post(posts::create_post),
        )
        .route(
            "/edit-post/{id}",
            get(posts::edit_post_page).post(posts::update_post),
        )
        .route("/delete/{id}", get(posts::delete_post))
}

/// Create the static page routes router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
}

/// Create all routes for the blog.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(page_routes())
        .merge(auth_routes())
}

/// A 302 Found redirect.
///
/// axum's `Redirect::to` answers 303 See Other; every redirect on this
/// site is a plain 302.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_found_is_302() {
        let response = found("/login");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login"
        );
    }
}
