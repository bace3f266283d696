//! Quillpress Core - Shared types library.
//!
//! This crate provides the domain types shared by the Quillpress web
//! application: type-safe entity IDs, validated email addresses, and the
//! user role enum.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no
//! HTTP. Database bindings (`sqlx` `Type`/`Encode`/`Decode` impls for
//! SQLite) are behind the `sqlite` feature so the types stay usable from
//! anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
