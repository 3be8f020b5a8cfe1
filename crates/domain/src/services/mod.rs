//! Domain services for room booking.
//!
//! Services contain business logic that operates on domain models.

pub mod booking;

pub use booking::attach_room_names;
