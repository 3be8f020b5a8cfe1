//! Store error types.

use thiserror::Error;

/// Error returned by store mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Room {0} not found")]
    RoomNotFound(u32),

    #[error("Notification {0} not found")]
    NotificationNotFound(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::RoomNotFound(7).to_string(), "Room 7 not found");
        assert_eq!(
            StoreError::NotificationNotFound(2).to_string(),
            "Notification 2 not found"
        );
    }
}
