//! Session middleware configuration.
//!
//! Sets up SQLite-backed sessions using tower-sessions, with cookies
//! signed by a key derived from the configured session secret.

use secrecy::ExposeSecret;
use thiserror::Error;
use tower_sessions::cookie::Key;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::AppConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "qp_session";

/// Session expiry time in seconds (7 days of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Error building the session layer.
#[derive(Debug, Error)]
pub enum SessionLayerError {
    /// The configured secret cannot be turned into a signing key.
    #[error("invalid session signing secret: {0}")]
    Key(#[from] tower_sessions::cookie::KeyError),
}

/// Create the session layer with a SQLite store and signed cookies.
///
/// The store's table must already exist (`SqliteStore::migrate`).
///
/// # Errors
///
/// Returns `SessionLayerError` if the configured secret is too short to
/// derive a signing key from.
pub fn create_session_layer(
    store: SqliteStore,
    config: &AppConfig,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, SessionLayerError> {
    let key = Key::try_from(config.session_secret.expose_secret().as_bytes())?;

    // Secure cookies whenever the site is served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    Ok(SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key))
}
