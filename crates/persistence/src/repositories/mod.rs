//! Store implementations.

pub mod notification;
pub mod room;

pub use notification::NotificationRepository;
pub use room::RoomRepository;
