//! User entity model and DTOs.

use authgate_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserSummary`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub login: String,
    pub password_hash: String,
}

/// Public listing entry. `login` is markup-escaped before it gets here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub login: String,
}

/// DTO for inserting a new user. The hash is produced by the caller.
#[derive(Debug)]
pub struct CreateUser {
    pub login: String,
    pub password_hash: String,
}
