//! HTTP middleware and request extractors.
//!
//! # Layer Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with SQLite store, signed cookies)

pub mod auth;
pub mod flash;
pub mod session;

pub use auth::{OptionalUser, RequireAdmin, clear_current_user, set_current_user};
pub use flash::{push_flash, take_flash};
pub use session::create_session_layer;
