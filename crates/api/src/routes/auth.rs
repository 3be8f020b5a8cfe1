//! Login, logout and user directory endpoints.

use axum::{extract::State, http::HeaderMap, Json};
use domain::models::room::MessageResponse;
use domain::models::user::{LoginRequest, LoginResponse, UsersResponse};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::middleware::metrics::record_login;

/// Log in with a directory username and password.
///
/// On success the token is returned in the body and set as an httpOnly
/// cookie.
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<(HeaderMap, Json<LoginResponse>), ApiError> {
    request.validate()?;

    let outcome = match state.auth.login(&request.username, &request.password) {
        Ok(outcome) => outcome,
        Err(e) => {
            record_login("failure");
            tracing::warn!(username = %request.username, "Login failed");
            return Err(e.into());
        }
    };
    record_login("success");

    let mut headers = HeaderMap::new();
    state.cookies.add_token_cookie(&mut headers, &outcome.token);

    tracing::info!(username = %outcome.username, role = %outcome.role, "User logged in");

    Ok((
        headers,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            username: outcome.username,
            role: outcome.role,
            token: outcome.token,
            expires_in: outcome.expires_in,
        }),
    ))
}

/// Clear the credential cookie.
///
/// Tokens are not revoked; one already handed out stays valid until it
/// expires.
///
/// POST /logout
pub async fn logout(State(state): State<AppState>) -> (HeaderMap, Json<MessageResponse>) {
    let mut headers = HeaderMap::new();
    state.cookies.add_clear_cookie(&mut headers);

    (headers, Json(MessageResponse::new("Logout successful")))
}

/// Dump the user directory without passwords.
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.auth.users().iter().map(|u| u.summary()).collect(),
    })
}
