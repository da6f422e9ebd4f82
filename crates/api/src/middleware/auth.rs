//! Bearer-token authorization gate.
//!
//! [`require_auth`] is composed around protected routes with
//! `route_layer(from_fn_with_state(..))`. It resolves the caller's identity
//! from the `Authorization` header and hands it to the handler as an
//! [`AuthUser`] request extension.

use authgate_core::error::AuthorizationError;
use authgate_core::types::DbId;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::jwt::TokenService;
use crate::error::AppError;
use crate::state::AppState;

/// Identity resolved from a valid bearer token.
///
/// ```ignore
/// async fn my_handler(Extension(user): Extension<AuthUser>) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: DbId,
}

/// Resolve the caller from request headers.
///
/// Every token verification failure maps to
/// [`AuthorizationError::InvalidOrExpiredToken`], whatever the cause.
pub fn authorize(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<AuthUser, AuthorizationError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(AuthorizationError::MissingAuth)?;

    let mut parts = header.split_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AuthorizationError::InvalidOrExpiredToken);
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthorizationError::InvalidScheme);
    }

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        AuthorizationError::InvalidOrExpiredToken
    })?;

    Ok(AuthUser { user_id })
}

/// Middleware: reject unauthenticated requests with 401, otherwise attach
/// [`AuthUser`] to the request and run the wrapped handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authorize(req.headers(), &state.tokens)?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
