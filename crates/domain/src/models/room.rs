//! Room domain models and availability rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A (date, start, end) window in a room's availability list.
///
/// Slots have no identifier of their own; two slots are the same slot when
/// all three strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct TimeSlot {
    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_date"))]
    pub date: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_clock_time"))]
    pub start_time: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_clock_time"))]
    pub end_time: String,
}

impl TimeSlot {
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// A bookable physical space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub capacity: u32,
    pub description: String,
    pub image_url: String,
    pub availability: Vec<TimeSlot>,
    pub facilities: Vec<String>,
    pub usage_history: Vec<String>,
}

/// Which branch a toggle took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A matching slot existed and was removed.
    Removed,
    /// No matching slot existed, so it was appended.
    Added,
}

impl ToggleOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ToggleOutcome::Removed => "Room availability updated successfully",
            ToggleOutcome::Added => "Room availability added successfully",
        }
    }

    /// Short label for logs and metrics.
    pub fn action(&self) -> &'static str {
        match self {
            ToggleOutcome::Removed => "removed",
            ToggleOutcome::Added => "added",
        }
    }
}

impl Room {
    /// Appends a slot. Duplicates are kept.
    pub fn add_slot(&mut self, slot: TimeSlot) {
        self.availability.push(slot);
    }

    /// Removes the first slot equal to `slot`, or appends it when none matches.
    ///
    /// The relative order of the remaining slots is preserved.
    pub fn toggle_slot(&mut self, slot: TimeSlot) -> ToggleOutcome {
        match self.availability.iter().position(|existing| *existing == slot) {
            Some(index) => {
                self.availability.remove(index);
                ToggleOutcome::Removed
            }
            None => {
                self.availability.push(slot);
                ToggleOutcome::Added
            }
        }
    }
}

/// Request payload for creating a room.
///
/// A client-supplied `id` is ignored; the store assigns one.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateRoomRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,

    pub capacity: u32,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub facilities: Vec<String>,

    #[serde(default)]
    pub usage_history: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub availability: Vec<TimeSlot>,
}

impl CreateRoomRequest {
    /// Builds the stored room under the id chosen by the store.
    pub fn into_room(self, id: u32) -> Room {
        Room {
            id,
            name: self.name,
            capacity: self.capacity,
            description: self.description,
            image_url: self.image_url,
            availability: self.availability,
            facilities: self.facilities,
            usage_history: self.usage_history,
        }
    }
}

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
