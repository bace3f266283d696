//! One-time flash messages.
//!
//! A flash is queued in the session when a handler redirects, and taken
//! exactly once by the next rendered page.

use tower_sessions::Session;

use crate::models::session_keys;

/// Queue a flash message for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn push_flash(
    session: &Session,
    message: &str,
) -> Result<(), tower_sessions::session::Error> {
    let mut messages: Vec<String> = session
        .get(session_keys::FLASH)
        .await?
        .unwrap_or_default();
    messages.push(message.to_owned());
    session.insert(session_keys::FLASH, &messages).await
}

/// Take every pending flash message, leaving none behind.
///
/// A broken session reads as "no messages" rather than failing the page.
pub async fn take_flash(session: &Session) -> Vec<String> {
    session
        .remove::<Vec<String>>(session_keys::FLASH)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}
