//! User capability roles.

use serde::{Deserialize, Serialize};

/// What a user account is allowed to do.
///
/// Quillpress has exactly one administrator: the first account registered
/// on the site. The capability is stored as a column on the user row
/// rather than inferred from a well-known user id, so authorization reads
/// as a role check everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "sqlite", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlite", sqlx(rename_all = "lowercase"))]
pub enum Role {
    /// May create, edit, and delete posts.
    Admin,
    /// May read posts and leave comments.
    #[default]
    Member,
}

impl Role {
    /// Whether this role carries post-management rights.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
