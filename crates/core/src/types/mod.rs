//! Core types for Quillpress.
//!
//! Type-safe wrappers for the domain concepts the rest of the workspace
//! builds on.

pub mod email;
pub mod id;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use role::Role;
