//! Domain layer for the room booking backend.
//!
//! This crate contains:
//! - Domain models (Room, TimeSlot, Notification, UserAccount)
//! - Request payloads and their validation rules
//! - Business logic services (availability toggling, room-name join)

pub mod models;
pub mod services;
