//! Joins borrow requests with the rooms they reference.

use std::collections::HashMap;

use crate::models::{Notification, NotificationWithRoom, Room};

/// Substitutes each notification's room id with the room's name.
///
/// This is an inner join: a notification whose room does not exist is
/// dropped from the result. Input order is preserved.
pub fn attach_room_names(
    notifications: Vec<Notification>,
    rooms: &[Room],
) -> Vec<NotificationWithRoom> {
    let names: HashMap<u32, &str> = rooms
        .iter()
        .map(|room| (room.id, room.name.as_str()))
        .collect();

    notifications
        .into_iter()
        .filter_map(|notification| {
            let name = names.get(&notification.room_id)?.to_string();
            Some(NotificationWithRoom::new(notification, name))
        })
        .collect()
}
