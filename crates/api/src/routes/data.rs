//! Route definitions for the protected `/api` resource.

use axum::routing::get;
use axum::{middleware, Router};

use crate::handlers::data;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Routes mounted at `/api`. Every route here sits behind the bearer gate.
///
/// ```text
/// GET /data -> list_users (requires auth)
/// ```
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/data", get(data::list_users))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
