//! Borrow-request (notification) domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Review state of a borrow request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationStatus {
    #[default]
    #[serde(rename = "proses", alias = "Proses")]
    Pending,
    #[serde(rename = "diterima", alias = "Diterima")]
    Approved,
    #[serde(rename = "ditolak", alias = "Ditolak")]
    Rejected,
}

/// Spellings accepted by the status-update operation.
///
/// Both the capitalised and lower-case forms have been used by clients, so
/// both are accepted. Matching is exact.
pub const DECISION_LITERALS: [(&str, NotificationStatus); 4] = [
    ("Diterima", NotificationStatus::Approved),
    ("diterima", NotificationStatus::Approved),
    ("Ditolak", NotificationStatus::Rejected),
    ("ditolak", NotificationStatus::Rejected),
];

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::Pending => "proses",
            NotificationStatus::Approved => "diterima",
            NotificationStatus::Rejected => "ditolak",
        }
    }

    /// Parses a reviewer decision. Only the approved/rejected literals match.
    pub fn from_decision(value: &str) -> Option<Self> {
        DECISION_LITERALS
            .iter()
            .find(|(literal, _)| *literal == value)
            .map(|(_, status)| *status)
    }
}

impl FromStr for NotificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "proses" | "pending" => Ok(NotificationStatus::Pending),
            "diterima" | "approved" => Ok(NotificationStatus::Approved),
            "ditolak" | "rejected" => Ok(NotificationStatus::Rejected),
            _ => Err(format!("Invalid notification status: {}", s)),
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A borrow request submitted against a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: u32,
    pub room_id: u32,
    pub borrow_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: NotificationStatus,
    pub file: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A validated submission, ready to be stored.
#[derive(Debug, Clone, Validate)]
pub struct NewNotification {
    #[validate(range(min = 1, message = "room_id must be a positive integer"))]
    pub room_id: u32,

    #[validate(custom(function = "shared::validation::validate_date"))]
    pub borrow_date: String,

    #[validate(custom(function = "shared::validation::validate_clock_time"))]
    pub start_time: String,

    #[validate(custom(function = "shared::validation::validate_clock_time"))]
    pub end_time: String,

    pub status: NotificationStatus,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,

    pub file: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub username: String,
}

impl NewNotification {
    /// Builds the stored notification under the id chosen by the store.
    pub fn into_notification(self, id: u32) -> Notification {
        Notification {
            id,
            room_id: self.room_id,
            borrow_date: self.borrow_date,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
            file: self.file,
            description: self.description,
            username: Some(self.username),
        }
    }
}

/// A notification with the room name substituted for the room id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NotificationWithRoom {
    pub id: u32,
    pub room_name: String,
    pub borrow_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: NotificationStatus,
    pub file: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl NotificationWithRoom {
    pub fn new(notification: Notification, room_name: impl Into<String>) -> Self {
        Self {
            id: notification.id,
            room_name: room_name.into(),
            borrow_date: notification.borrow_date,
            start_time: notification.start_time,
            end_time: notification.end_time,
            status: notification.status,
            file: notification.file,
            description: notification.description,
            username: notification.username,
        }
    }
}

/// Request payload for reviewing a notification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateStatusRequest {
    pub id: u32,
    pub status: String,
}

/// Response body for a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitNotificationResponse {
    pub message: String,
    pub notification: Notification,
}
