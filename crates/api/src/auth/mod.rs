//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Signed, time-limited bearer tokens.

pub mod jwt;
pub mod password;
