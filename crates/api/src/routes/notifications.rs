//! Borrow request (notification) endpoint handlers.

use std::str::FromStr;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use domain::models::notification::{
    NewNotification, SubmitNotificationResponse, UpdateStatusRequest,
};
use domain::models::room::MessageResponse;
use domain::models::{Notification, NotificationStatus, NotificationWithRoom};
use domain::services::attach_room_names;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{AppJson, AuthUser};
use crate::middleware::metrics::{record_notification_submitted, record_status_updated};

const REQUIRED_FIELDS_MESSAGE: &str =
    "Field room_id, borrow_date, start_time, and end_time are required";

/// Directory prefix recorded for uploaded files. Bytes are not stored.
const UPLOAD_PREFIX: &str = "uploads/";

/// Raw multipart fields of a submission, before validation.
#[derive(Debug, Default)]
struct SubmissionForm {
    room_id: Option<String>,
    borrow_date: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    status: Option<String>,
    description: Option<String>,
    file: Option<String>,
}

impl SubmissionForm {
    fn set_text(&mut self, name: &str, value: String) {
        let slot = match name {
            "room_id" => &mut self.room_id,
            "borrow_date" => &mut self.borrow_date,
            "start_time" => &mut self.start_time,
            "end_time" => &mut self.end_time,
            "status" => &mut self.status,
            "description" => &mut self.description,
            _ => {
                tracing::debug!(field = name, "Ignoring unknown form field");
                return;
            }
        };
        *slot = Some(value);
    }

    /// Checks presence and types, producing a submission for `username`.
    fn into_submission(self, username: String) -> Result<NewNotification, ApiError> {
        fn required(value: Option<String>) -> Result<String, ApiError> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))
        }

        let room_id = required(self.room_id)?
            .parse::<u32>()
            .map_err(|_| ApiError::Validation("room_id must be a positive integer".to_string()))?;

        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => NotificationStatus::default(),
            Some(raw) => NotificationStatus::from_str(raw).map_err(ApiError::Validation)?,
        };

        Ok(NewNotification {
            room_id,
            borrow_date: required(self.borrow_date)?,
            start_time: required(self.start_time)?,
            end_time: required(self.end_time)?,
            status,
            description: self.description.unwrap_or_default(),
            file: self.file.unwrap_or_default(),
            username,
        })
    }
}

/// Placeholder path for an uploaded file name, ignoring any client-side
/// directories.
fn upload_path(file_name: &str) -> Option<String> {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    (!base.is_empty()).then(|| format!("{}{}", UPLOAD_PREFIX, base))
}

/// List all notifications.
///
/// GET /notifications
pub async fn list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.find_all().await)
}

/// List notifications with the referenced room's name.
///
/// Notifications whose room does not exist are left out.
///
/// GET /notifications-with-name
pub async fn list_notifications_with_room_name(
    State(state): State<AppState>,
) -> Json<Vec<NotificationWithRoom>> {
    // Each store is locked on its own; never both at once.
    let notifications = state.notifications.find_all().await;
    let rooms = state.rooms.find_all().await;

    Json(attach_room_names(notifications, &rooms))
}

/// Submit a borrow request as the authenticated caller.
///
/// POST /notifications (multipart/form-data)
pub async fn submit_notification(
    State(state): State<AppState>,
    user: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SubmitNotificationResponse>, ApiError> {
    let mut multipart = multipart?;
    let mut form = SubmissionForm::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let path = field.file_name().and_then(upload_path);
            // Drain the part; uploads are not persisted.
            let mut size = 0;
            while let Some(chunk) = field.chunk().await? {
                size += chunk.len();
            }
            tracing::debug!(size, path = ?path, "Discarded uploaded file");
            form.file = path;
        } else {
            let value = field.text().await?;
            form.set_text(&name, value);
        }
    }

    let submission = form.into_submission(user.username)?;
    submission.validate()?;

    let notification = state.notifications.create(submission).await;
    record_notification_submitted();

    tracing::info!(
        notification_id = notification.id,
        room_id = notification.room_id,
        username = notification.username.as_deref().unwrap_or_default(),
        "Notification submitted"
    );

    Ok(Json(SubmitNotificationResponse {
        message: "Notification added successfully".to_string(),
        notification,
    }))
}

/// Approve or reject a borrow request.
///
/// POST /update-status
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<UpdateStatusRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let status = NotificationStatus::from_decision(&request.status).ok_or_else(|| {
        ApiError::Validation("Status must be 'Diterima' or 'Ditolak'".to_string())
    })?;

    let updated = state
        .notifications
        .update_status(request.id, status)
        .await?;
    record_status_updated(status.as_str());

    tracing::info!(
        notification_id = updated.id,
        status = %updated.status,
        reviewer = %user.username,
        "Notification status updated"
    );

    Ok(Json(MessageResponse::new("Status berhasil diperbarui")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SubmissionForm {
        SubmissionForm {
            room_id: Some("2".into()),
            borrow_date: Some("2024-10-20".into()),
            start_time: Some("10:00".into()),
            end_time: Some("12:00".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_upload_path() {
        assert_eq!(upload_path("proposal.pdf").as_deref(), Some("uploads/proposal.pdf"));
        assert_eq!(
            upload_path("../../etc/passwd").as_deref(),
            Some("uploads/passwd")
        );
        assert_eq!(
            upload_path("C:\\Users\\me\\surat.pdf").as_deref(),
            Some("uploads/surat.pdf")
        );
        assert_eq!(upload_path(""), None);
        assert_eq!(upload_path("dir/"), None);
    }

    #[test]
    fn test_into_submission_defaults() {
        let submission = complete_form().into_submission("user".into()).unwrap();

        assert_eq!(submission.room_id, 2);
        assert_eq!(submission.status, NotificationStatus::Pending);
        assert_eq!(submission.file, "");
        assert_eq!(submission.description, "");
        assert_eq!(submission.username, "user");
    }

    #[test]
    fn test_into_submission_status_case_insensitive() {
        let mut form = complete_form();
        form.status = Some("DITERIMA".into());

        let submission = form.into_submission("user".into()).unwrap();
        assert_eq!(submission.status, NotificationStatus::Approved);
    }

    #[test]
    fn test_into_submission_unknown_status() {
        let mut form = complete_form();
        form.status = Some("maybe".into());

        assert!(matches!(
            form.into_submission("user".into()),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_into_submission_missing_field() {
        let mut form = complete_form();
        form.end_time = None;

        match form.into_submission("user".into()) {
            Err(ApiError::Validation(msg)) => assert_eq!(msg, REQUIRED_FIELDS_MESSAGE),
            other => panic!("Expected Validation error, got {:?}", other.map(|s| s.room_id)),
        }
    }

    #[test]
    fn test_into_submission_blank_field_counts_as_missing() {
        let mut form = complete_form();
        form.borrow_date = Some("   ".into());

        assert!(form.into_submission("user".into()).is_err());
    }

    #[test]
    fn test_into_submission_bad_room_id() {
        for raw in ["abc", "-3", "1.0"] {
            let mut form = complete_form();
            form.room_id = Some(raw.into());
            assert!(
                form.into_submission("user".into()).is_err(),
                "room_id {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_set_text_ignores_unknown_fields() {
        let mut form = SubmissionForm::default();
        form.set_text("room_id", "5".into());
        form.set_text("id", "99".into());

        assert_eq!(form.room_id.as_deref(), Some("5"));
    }
}
