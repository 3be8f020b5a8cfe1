//! Login token extractor.
//!
//! Provides an Axum extractor that resolves the caller's identity from the
//! login token.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::app::AppState;
use crate::error::ApiError;

/// Authenticated caller, resolved from the login token.
///
/// The token is read from the `Authorization` header (the `Bearer ` prefix
/// is optional). When the header is absent the credential cookie is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

/// Pulls the raw token out of an `Authorization` header value.
fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    // A bare scheme with no credentials counts as no header at all.
    let token = match value.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(token_from_header);

        let token = header_token
            .or_else(|| state.cookies.extract_token(&parts.headers))
            .ok_or_else(|| ApiError::Unauthorized("Missing authentication token".to_string()))?;

        let claims = state.auth.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected login token");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        })?;

        Ok(AuthUser {
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_header_bearer() {
        assert_eq!(token_from_header("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_token_from_header_raw() {
        assert_eq!(token_from_header("abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_token_from_header_empty() {
        assert_eq!(token_from_header(""), None);
        assert_eq!(token_from_header("Bearer "), None);
        assert_eq!(token_from_header("   "), None);
        assert_eq!(token_from_header("Bearer"), None);
        assert_eq!(token_from_header("Bearer    "), None);
    }

    #[test]
    fn test_token_from_header_keeps_scheme_lookalike_tokens() {
        assert_eq!(token_from_header("Bearerabc"), Some("Bearerabc"));
        assert_eq!(token_from_header("  Bearer  abc  "), Some("abc"));
    }
}
