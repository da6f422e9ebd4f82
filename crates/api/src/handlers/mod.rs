//! Request handlers.
//!
//! Handlers delegate to the repositories in `authgate_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod data;
