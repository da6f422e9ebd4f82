/// Failures of the authorization gate.
///
/// Token verification failures all collapse into [`InvalidOrExpiredToken`]
/// so a client cannot tell an expired token from a forged one.
///
/// [`InvalidOrExpiredToken`]: AuthorizationError::InvalidOrExpiredToken
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Authorization header required")]
    MissingAuth,

    #[error("Invalid token type")]
    InvalidScheme,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad credentials at login.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthorizationError),
}
