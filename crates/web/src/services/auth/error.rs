//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
///
/// Unknown-user and wrong-password are deliberately distinct variants:
/// each gets its own flash message on the login page.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] quillpress_core::EmailError),

    /// Display name missing or blank.
    #[error("display name cannot be empty")]
    MissingName,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Email already registered.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// No account with that email.
    #[error("no account with that email")]
    UnknownUser,

    /// Password did not match the stored hash.
    #[error("wrong password")]
    WrongPassword,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
