//! Login and token verification against the fixed user directory.

use domain::models::{Role, UserAccount};
use shared::jwt::{Claims, JwtConfig, JwtError};
use thiserror::Error;

use crate::config::JwtAuthConfig;
use crate::error::ApiError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid username or password".into())
            }
            AuthError::TokenError(e) => e.into(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub username: String,
    pub role: Role,
    pub token: String,
    pub expires_in: i64,
}

/// Authentication service.
///
/// Holds the user directory and signing keys, both immutable after startup.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Vec<UserAccount>,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(users: Vec<UserAccount>, jwt_config: &JwtAuthConfig) -> Result<Self, JwtError> {
        let jwt = JwtConfig::with_leeway(
            &jwt_config.secret,
            jwt_config.token_expiry_secs,
            jwt_config.leeway_secs,
        )?;

        Ok(Self { users, jwt })
    }

    /// Checks credentials and issues a token.
    ///
    /// Usernames match exactly; an unknown user and a wrong password are
    /// indistinguishable to the caller.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let account = self
            .users
            .iter()
            .find(|u| u.username == username)
            .filter(|u| u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let (token, claims) = self.jwt.generate_token(&account.username)?;

        Ok(LoginOutcome {
            username: account.username.clone(),
            role: account.role,
            token,
            expires_in: claims.exp - claims.iat,
        })
    }

    /// Validates a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.jwt.validate_token(token)?)
    }

    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    /// Token lifetime in seconds.
    pub fn token_expiry_secs(&self) -> i64 {
        self.jwt.token_expiry_secs
    }
}
