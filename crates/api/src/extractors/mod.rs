//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod auth;
pub mod json;

pub use auth::AuthUser;
pub use json::{AppJson, AppQuery};
