//! Health check endpoint handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub stores: StoreCounts,
}

/// Number of records held by each store.
#[derive(Debug, Serialize)]
pub struct StoreCounts {
    pub rooms: usize,
    pub notifications: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stores: StoreCounts {
            rooms: state.rooms.count().await,
            notifications: state.notifications.count().await,
        },
    })
}
