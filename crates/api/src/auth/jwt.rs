//! Bearer token issuance and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. They are
//! stateless: nothing is stored server-side, there is no refresh and no
//! revocation. A token stays valid until its `exp` passes.

use authgate_core::types::DbId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{env_or, required_env, ConfigError};

/// Default token lifetime: 24 hours.
pub const DEFAULT_EXPIRY_SECS: i64 = 86_400;

/// Claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The user's internal database id.
    pub user_id: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for token signing and lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in seconds (default: 86400).
    pub expiry_secs: i64,
}

impl JwtConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET_KEY`  | **yes**  | --      |
    /// | `JWT_EXPIRY_SECS` | no       | `86400` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = required_env("JWT_SECRET_KEY")?;
        let expiry_secs = env_or("JWT_EXPIRY_SECS", DEFAULT_EXPIRY_SECS)?;
        Ok(Self {
            secret,
            expiry_secs,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is malformed or has an invalid signature")]
    Malformed,

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies bearer tokens with a process-wide secret.
///
/// Keys are derived once at construction. Cloning is cheap enough to keep
/// one copy in the shared application state.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: no grace period after `exp`.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiry_secs: config.expiry_secs,
        }
    }

    /// Issue a token for `user_id` expiring `expiry_secs` from now.
    pub fn issue(&self, user_id: DbId) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            exp: chrono::Utc::now().timestamp() + self.expiry_secs,
        };
        self.sign(&claims)
    }

    /// Sign an arbitrary claim set with this service's key.
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Check signature and expiration, returning the embedded user id.
    pub fn verify(&self, token: &str) -> Result<DbId, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.user_id)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}
