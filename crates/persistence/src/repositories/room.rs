//! Room store.

use std::sync::Arc;

use domain::models::room::CreateRoomRequest;
use domain::models::{Room, TimeSlot, ToggleOutcome};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::metrics::{record_collection_size, OperationTimer};

/// Store for rooms and their availability slots.
///
/// The collection sits behind a single mutex so that id assignment and
/// append happen in one critical section.
#[derive(Clone, Default)]
pub struct RoomRepository {
    rooms: Arc<Mutex<Vec<Room>>>,
}

impl RoomRepository {
    /// Creates a store holding `rooms` in the given order.
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Arc::new(Mutex::new(rooms)),
        }
    }

    /// All rooms in creation order.
    pub async fn find_all(&self) -> Vec<Room> {
        let timer = OperationTimer::new("list_rooms");
        let rooms = self.rooms.lock().await.clone();
        timer.record();
        rooms
    }

    /// Find a room by ID.
    pub async fn find_by_id(&self, id: u32) -> Option<Room> {
        let timer = OperationTimer::new("find_room_by_id");
        let room = self.rooms.lock().await.iter().find(|r| r.id == id).cloned();
        timer.record();
        room
    }

    /// Number of stored rooms.
    pub async fn count(&self) -> usize {
        self.rooms.lock().await.len()
    }

    /// Stores a new room under `max existing id + 1` and returns it.
    pub async fn create(&self, request: CreateRoomRequest) -> Room {
        let timer = OperationTimer::new("create_room");
        let mut rooms = self.rooms.lock().await;

        let id = rooms.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let room = request.into_room(id);
        rooms.push(room.clone());
        record_collection_size("rooms", rooms.len());

        drop(rooms);
        timer.record();
        tracing::debug!(room_id = id, "Room stored");
        room
    }

    /// Appends a slot to a room's availability.
    pub async fn add_slot(&self, id: u32, slot: TimeSlot) -> Result<(), StoreError> {
        let timer = OperationTimer::new("add_slot");
        let result = self
            .with_room(id, |room| room.add_slot(slot))
            .await;
        timer.record();
        result
    }

    /// Removes the matching slot from a room, or appends it when absent.
    pub async fn toggle_slot(&self, id: u32, slot: TimeSlot) -> Result<ToggleOutcome, StoreError> {
        let timer = OperationTimer::new("toggle_slot");
        let result = self
            .with_room(id, |room| room.toggle_slot(slot))
            .await;
        timer.record();
        result
    }

    async fn with_room<T>(
        &self,
        id: u32,
        f: impl FnOnce(&mut Room) -> T,
    ) -> Result<T, StoreError> {
        let mut rooms = self.rooms.lock().await;
        let room = rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::RoomNotFound(id))?;
        Ok(f(room))
    }
}
