//! Common test utilities for integration tests.
//!
//! Every app built here starts from the seed data: ten rooms and three
//! notifications.

// Helpers are shared by several test binaries; not all use every one.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use domain::models::{Role, UserAccount};
use room_booking_api::{
    app::create_app,
    config::{
        AuthConfig, Config, CookieConfig, JwtAuthConfig, LoggingConfig, SecurityConfig,
        ServerConfig,
    },
};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const MULTIPART_BOUNDARY: &str = "----room-booking-test-boundary";

/// Test configuration with the default user directory.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
            upload_max_bytes: 32 * 1024 * 1024,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
        },
        jwt: JwtAuthConfig {
            secret: TEST_SECRET.to_string(),
            token_expiry_secs: 86_400,
            leeway_secs: 0,
        },
        cookie: CookieConfig::default(),
        auth: AuthConfig {
            users: vec![
                UserAccount::new("admin", "password123", Role::Admin),
                UserAccount::new("user", "password123", Role::User),
            ],
        },
    }
}

/// Build a fresh app over freshly seeded stores.
pub fn create_test_app() -> Router {
    create_app(test_config()).expect("Failed to create app")
}

/// Helper to create a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Helper to create a JSON request carrying a bearer token.
pub fn json_request_with_auth(method: Method, uri: &str, body: Value, token: &str) -> Request<Body> {
    let mut request = json_request(method, uri, body);
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    request
}

/// Helper to create a body-less request.
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// A part of a multipart/form-data body.
pub enum FormPart<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

/// Encode parts as a multipart/form-data body using [`MULTIPART_BOUNDARY`].
pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        match part {
            FormPart::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            FormPart::File(name, file_name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

/// Helper to create a multipart request, optionally with a bearer token.
pub fn multipart_request(uri: &str, parts: &[FormPart<'_>], token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        );

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(multipart_body(parts))).unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Send a request and return status and parsed JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

/// Log in and return the issued token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/login",
            serde_json::json!({ "username": username, "password": password }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Standard valid submission fields for room 1.
pub fn submission_parts<'a>() -> Vec<FormPart<'a>> {
    vec![
        FormPart::Text("room_id", "1"),
        FormPart::Text("borrow_date", "2024-10-20"),
        FormPart::Text("start_time", "10:00"),
        FormPart::Text("end_time", "12:00"),
        FormPart::Text("description", "Rapat himpunan mahasiswa"),
    ]
}
