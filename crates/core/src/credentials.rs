//! Syntactic policy for login names and passwords.
//!
//! Checked before any hashing or storage work. Rules are applied in a fixed
//! order and the first failure wins, so clients always see the same message
//! for the same input.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum login length in characters.
pub const LOGIN_MIN_LEN: usize = 3;
/// Maximum login length in characters.
pub const LOGIN_MAX_LEN: usize = 50;
/// Minimum password length in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

pub const MSG_NOT_STRINGS: &str = "Login and password must be strings";
pub const MSG_LOGIN_LENGTH: &str = "Login must be between 3 and 50 characters";
pub const MSG_PASSWORD_LENGTH: &str = "Password must be at least 8 characters";
pub const MSG_LOGIN_CHARSET: &str = "Login can contain only letters, digits, and underscores";

static LOGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex"));

/// A login/password pair that passed [`validate_credentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// Validate a raw login/password pair.
///
/// `None` stands for a value that was absent or not a string in the request.
///
/// # Examples
///
/// ```
/// use authgate_core::credentials::validate_credentials;
///
/// assert!(validate_credentials(Some("alice_01"), Some("longenough1")).is_ok());
/// assert!(validate_credentials(Some("al"), Some("longenough1")).is_err());
/// ```
pub fn validate_credentials<'a>(
    login: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<Credentials<'a>, CoreError> {
    let (Some(login), Some(password)) = (login, password) else {
        return Err(CoreError::Validation(MSG_NOT_STRINGS.into()));
    };

    let login_len = login.chars().count();
    if !(LOGIN_MIN_LEN..=LOGIN_MAX_LEN).contains(&login_len) {
        return Err(CoreError::Validation(MSG_LOGIN_LENGTH.into()));
    }

    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(CoreError::Validation(MSG_PASSWORD_LENGTH.into()));
    }

    if !LOGIN_RE.is_match(login) {
        return Err(CoreError::Validation(MSG_LOGIN_CHARSET.into()));
    }

    Ok(Credentials { login, password })
}
