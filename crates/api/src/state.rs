use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::auth::jwt::TokenService;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: authgate_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Token issuer/verifier built from `config.jwt`.
    pub tokens: TokenService,
    /// Signing key for the session cookie, derived from `config.session_secret`.
    pub session_key: Key,
}

impl AppState {
    /// Build the state, deriving signing keys from `config` once.
    ///
    /// `config.session_secret` must be at least
    /// [`MIN_SESSION_SECRET_LEN`](crate::config::MIN_SESSION_SECRET_LEN) bytes;
    /// [`ServerConfig::from_env`] guarantees this.
    pub fn new(pool: authgate_db::DbPool, config: ServerConfig) -> Self {
        let tokens = TokenService::new(&config.jwt);
        let session_key = Key::derive_from(config.session_secret.as_bytes());
        Self {
            pool,
            config: Arc::new(config),
            tokens,
            session_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}
