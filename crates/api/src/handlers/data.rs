//! Handlers for the protected `/api` resource.

use authgate_db::models::user::UserSummary;
use authgate_db::repositories::UserRepo;
use axum::{Extension, Json};

use crate::error::AppResult;
use crate::extract::DbConn;
use crate::middleware::auth::AuthUser;

/// GET /api/data
///
/// List every user as `{id, login}`. Requires a bearer token.
pub async fn list_users(
    Extension(user): Extension<AuthUser>,
    mut conn: DbConn,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = UserRepo::list(&mut conn).await?;
    tracing::debug!(user_id = user.user_id, count = users.len(), "Listed users");
    Ok(Json(users))
}
