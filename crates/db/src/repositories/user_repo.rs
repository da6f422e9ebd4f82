//! Repository for the `users` table.

use authgate_core::markup::escape_markup;
use authgate_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::user::{CreateUser, User, UserSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, login, password_hash";

/// Provides create and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user.
    ///
    /// Returns `Ok(false)` when the login is already taken. Concurrent inserts
    /// of the same login are resolved by the unique constraint: exactly one
    /// succeeds, the rest see `false`.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateUser,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (login, password_hash) VALUES (?, ?)")
            .bind(&input.login)
            .bind(&input.password_hash)
            .execute(conn)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::debug!(login = %input.login, "Login already taken");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Find a user by login (exact, case-sensitive match).
    pub async fn find_by_login(
        conn: &mut SqliteConnection,
        login: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE login = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(login)
            .fetch_optional(conn)
            .await
    }

    /// List all users in id order, without password hashes.
    ///
    /// Each login is markup-escaped so clients that render it as HTML are safe.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<UserSummary>, sqlx::Error> {
        let rows: Vec<(DbId, String)> = sqlx::query_as("SELECT id, login FROM users ORDER BY id")
            .fetch_all(conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, login)| UserSummary {
                id,
                login: escape_markup(&login),
            })
            .collect())
    }
}
