//! Domain types and pure policy for the authgate service.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates build on it.

pub mod credentials;
pub mod error;
pub mod markup;
pub mod types;
