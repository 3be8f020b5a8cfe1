//! Application services used by the route handlers.

pub mod auth;
pub mod cookies;

pub use auth::{AuthError, AuthService, LoginOutcome};
pub use cookies::CookieHelper;
