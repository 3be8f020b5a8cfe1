//! Domain models for room booking.

pub mod notification;
pub mod room;
pub mod user;

pub use notification::{Notification, NotificationStatus, NotificationWithRoom};
pub use room::{Room, TimeSlot, ToggleOutcome};
pub use user::{Role, UserAccount};
