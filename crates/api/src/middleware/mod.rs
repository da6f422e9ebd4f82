//! Request middleware.
//!
//! - [`auth::require_auth`] -- Bearer-token gate for protected routes.

pub mod auth;
