//! Room and availability endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::room::{CreateRoomRequest, MessageResponse};
use domain::models::{Room, TimeSlot};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, AppQuery};
use crate::middleware::metrics::{record_availability_changed, record_room_created};

/// Parses a room id path segment.
pub(crate) fn parse_room_id(raw: &str) -> Result<u32, ApiError> {
    raw.parse::<u32>()
        .map_err(|_| ApiError::Validation("Invalid room ID".to_string()))
}

/// List all rooms.
///
/// GET /rooms
pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.rooms.find_all().await)
}

/// Get a single room.
///
/// GET /rooms/:id
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, ApiError> {
    let id = parse_room_id(&id)?;

    state
        .rooms
        .find_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))
}

/// Create a room. Any client-supplied id is ignored.
///
/// POST /rooms
pub async fn create_room(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateRoomRequest>,
) -> Result<Json<Room>, ApiError> {
    request.validate()?;

    let room = state.rooms.create(request).await;
    record_room_created();

    tracing::info!(room_id = room.id, name = %room.name, "Room created");

    Ok(Json(room))
}

/// Append an availability slot to a room.
///
/// POST /rooms/:id/availability
pub async fn add_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(slot): AppJson<TimeSlot>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_room_id(&id)?;
    slot.validate()?;

    state.rooms.add_slot(id, slot).await?;
    record_availability_changed("added");

    tracing::info!(room_id = id, "Availability slot added");

    Ok(Json(MessageResponse::new("Availability added successfully")))
}

/// Toggle an availability slot: remove it if present, add it otherwise.
///
/// PUT /rooms/:id/availability?date=..&start_time=..&end_time=..
pub async fn toggle_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppQuery(slot): AppQuery<TimeSlot>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_room_id(&id)?;
    slot.validate()?;

    let outcome = state.rooms.toggle_slot(id, slot).await?;
    record_availability_changed(outcome.action());

    tracing::info!(room_id = id, action = outcome.action(), "Availability slot toggled");

    Ok(Json(MessageResponse::new(outcome.message())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_room_id() {
        assert_eq!(parse_room_id("1").unwrap(), 1);
        assert_eq!(parse_room_id("0").unwrap(), 0);
        assert!(parse_room_id("abc").is_err());
        assert!(parse_room_id("-1").is_err());
        assert!(parse_room_id("1.5").is_err());
        assert!(parse_room_id("").is_err());
    }

    #[test]
    fn test_parse_room_id_message() {
        match parse_room_id("x") {
            Err(ApiError::Validation(msg)) => assert_eq!(msg, "Invalid room ID"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
