//! Authentication route handlers.
//!
//! Handles registration, login, and logout. Business-rule rejections
//! (taken email, unknown user, wrong password) answer with a flash
//! message and a redirect; only infrastructure failures become errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Response};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{
    OptionalUser, clear_current_user, push_flash, set_current_user, take_flash,
};
use crate::models::CurrentUser;
use crate::routes::found;
use crate::services::AuthService;
use crate::services::auth::AuthError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub current_user: Option<CurrentUser>,
    pub flash: Vec<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub current_user: Option<CurrentUser>,
    pub flash: Vec<String>,
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
#[instrument(skip_all)]
pub async fn register_page(
    session: Session,
    OptionalUser(current_user): OptionalUser,
) -> RegisterTemplate {
    RegisterTemplate {
        current_user,
        flash: take_flash(&session).await,
    }
}

/// Handle registration form submission.
///
/// A taken email sends the visitor to the login page instead; everyone
/// else is logged in straight away.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let auth = AuthService::new(state.pool());

    match auth
        .register(&form.name, &form.email, &form.password)
        .await
    {
        Ok(user) => {
            set_current_user(&session, &CurrentUser::from(&user)).await?;
            Ok(found("/"))
        }
        Err(AuthError::EmailTaken) => {
            tracing::warn!("registration rejected: email taken");
            push_flash(
                &session,
                "You've already signed up with that email, log in instead!",
            )
            .await?;
            Ok(found("/login"))
        }
        Err(AuthError::MissingName) => {
            push_flash(&session, "Please tell us your name.").await?;
            Ok(found("/register"))
        }
        Err(AuthError::InvalidEmail(_)) => {
            push_flash(&session, "That email address doesn't look right.").await?;
            Ok(found("/register"))
        }
        Err(AuthError::WeakPassword(reason)) => {
            push_flash(&session, &reason).await?;
            Ok(found("/register"))
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Login / Logout Routes
// =============================================================================

/// Display the login page.
#[instrument(skip_all)]
pub async fn login_page(
    session: Session,
    OptionalUser(current_user): OptionalUser,
) -> LoginTemplate {
    LoginTemplate {
        current_user,
        flash: take_flash(&session).await,
    }
}

/// Handle login form submission.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.email, &form.password).await {
        Ok(user) => {
            set_current_user(&session, &CurrentUser::from(&user)).await?;
            Ok(found("/"))
        }
        Err(AuthError::UnknownUser) => {
            tracing::warn!("login rejected: unknown email");
            push_flash(&session, "That email doesn't exist, register instead!").await?;
            Ok(found("/login"))
        }
        Err(AuthError::WrongPassword) => {
            tracing::warn!("login rejected: wrong password");
            push_flash(&session, "Wrong password, try again.").await?;
            Ok(found("/login"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle logout.
///
/// Clears the stored identity and destroys the whole session.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Response, AppError> {
    clear_current_user(&session).await?;
    session.flush().await?;
    Ok(found("/"))
}
