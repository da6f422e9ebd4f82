//! Handlers for the `/auth` resource (register, login).

use authgate_core::credentials::validate_credentials;
use authgate_core::error::CoreError;
use authgate_core::markup::escape_markup;
use authgate_db::models::user::CreateUser;
use authgate_db::repositories::UserRepo;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::password::{burn_verification, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::DbConn;
use crate::state::AppState;

/// Name of the signed cookie that records the logged-in user id.
pub const SESSION_COOKIE: &str = "session";

const MSG_REGISTERED: &str = "User registered successfully";
const MSG_LOGGED_IN: &str = "Login successful";
const MSG_BAD_CREDENTIALS: &str = "Invalid login or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /auth/login`.
///
/// Fields are kept as raw JSON so a number or object in place of a string is
/// reported by the credential policy rather than by the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub login: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

impl CredentialsRequest {
    fn login(&self) -> Option<&str> {
        self.login.as_ref().and_then(Value::as_str)
    }

    fn password(&self) -> Option<&str> {
        self.password.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Validate, hash, and store a new user. Returns 201, or 400 when the input
/// fails validation or the login is taken.
pub async fn register(
    mut conn: DbConn,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(input) = payload?;
    let creds = validate_credentials(input.login(), input.password())?;

    let password = creds.password.to_owned();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let new_user = CreateUser {
        login: creds.login.to_owned(),
        password_hash,
    };
    if !UserRepo::create(&mut conn, &new_user).await? {
        return Err(CoreError::Conflict(format!(
            "User {} already exists",
            escape_markup(creds.login)
        ))
        .into());
    }

    tracing::info!(login = %creds.login, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: MSG_REGISTERED,
        }),
    ))
}

/// POST /auth/login
///
/// Check credentials and return a bearer token. Also sets the signed
/// session cookie.
pub async fn login(
    State(state): State<AppState>,
    mut conn: DbConn,
    jar: SignedCookieJar,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<(SignedCookieJar, Json<LoginResponse>)> {
    let Json(input) = payload?;
    let creds = validate_credentials(input.login(), input.password())?;

    let user = UserRepo::find_by_login(&mut conn, creds.login).await?;

    // Unknown logins still pay for one verification.
    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let password = creds.password.to_owned();
    let matches = tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            burn_verification(&password);
            false
        }
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password verification task failed: {e}")))?;

    let Some(user) = user.filter(|_| matches) else {
        tracing::info!(login = %creds.login, "Login rejected");
        return Err(CoreError::Unauthenticated(MSG_BAD_CREDENTIALS.into()).into());
    };

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let session = Cookie::build((SESSION_COOKIE, user.id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    tracing::info!(user_id = user.id, "User logged in");
    Ok((
        jar.add(session),
        Json(LoginResponse {
            message: MSG_LOGGED_IN,
            token,
        }),
    ))
}
