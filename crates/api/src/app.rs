use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use persistence::repositories::{NotificationRepository, RoomRepository};
use persistence::seed::{seed_notifications, seed_rooms};
use shared::jwt::JwtError;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, security_headers_middleware, trace_id};
use crate::routes::{auth, health, notifications, rooms};
use crate::services::{AuthService, CookieHelper};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub rooms: RoomRepository,
    pub notifications: NotificationRepository,
    pub auth: Arc<AuthService>,
    pub cookies: CookieHelper,
}

impl AppState {
    /// Builds the state with the seeded stores.
    pub fn new(config: Config) -> Result<Self, JwtError> {
        let auth = AuthService::new(config.auth.users.clone(), &config.jwt)?;
        let cookies = CookieHelper::new(config.cookie.clone(), auth.token_expiry_secs());

        Ok(Self {
            config: Arc::new(config),
            rooms: RoomRepository::new(seed_rooms()),
            notifications: NotificationRepository::new(seed_notifications()),
            auth: Arc::new(auth),
            cookies,
        })
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.security.cors_origins.is_empty() {
        // Development: echo whatever origin asked, credentials included
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "Skipping invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn create_app(config: Config) -> Result<Router, JwtError> {
    let state = AppState::new(config)?;
    Ok(router(state))
}

/// Builds the router around an existing state.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let room_routes = Router::new()
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route("/rooms/:id", get(rooms::get_room))
        .route(
            "/rooms/:id/availability",
            post(rooms::add_availability).put(rooms::toggle_availability),
        );

    // Submission and review check the caller through the AuthUser extractor
    let notification_routes = Router::new()
        .route(
            "/notifications",
            get(notifications::list_notifications).post(notifications::submit_notification),
        )
        .route(
            "/notifications-with-name",
            get(notifications::list_notifications_with_room_name),
        )
        .route("/update-status", post(notifications::update_status))
        .layer(DefaultBodyLimit::max(config.server.upload_max_bytes));

    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/users", get(auth::list_users));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(room_routes)
        .merge(notification_routes)
        .merge(auth_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config))
        .with_state(state)
}
