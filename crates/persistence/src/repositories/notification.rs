//! Notification (borrow request) store.

use std::sync::Arc;

use domain::models::notification::NewNotification;
use domain::models::{Notification, NotificationStatus};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::metrics::{record_collection_size, OperationTimer};

/// Store for borrow requests.
///
/// Append-only: `status` is the only field mutated after creation.
#[derive(Clone, Default)]
pub struct NotificationRepository {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationRepository {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Arc::new(Mutex::new(notifications)),
        }
    }

    /// All notifications in creation order.
    pub async fn find_all(&self) -> Vec<Notification> {
        let timer = OperationTimer::new("list_notifications");
        let notifications = self.notifications.lock().await.clone();
        timer.record();
        notifications
    }

    /// Find a notification by ID.
    pub async fn find_by_id(&self, id: u32) -> Option<Notification> {
        self.notifications
            .lock()
            .await
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }

    /// Number of stored notifications.
    pub async fn count(&self) -> usize {
        self.notifications.lock().await.len()
    }

    /// Stores a submission under `count + 1` and returns it.
    ///
    /// Nothing is ever deleted, so `count + 1` is always a fresh id as long
    /// as it is computed under the lock.
    pub async fn create(&self, submission: NewNotification) -> Notification {
        let timer = OperationTimer::new("create_notification");
        let mut notifications = self.notifications.lock().await;

        let id = notifications.len() as u32 + 1;
        let notification = submission.into_notification(id);
        notifications.push(notification.clone());
        record_collection_size("notifications", notifications.len());

        drop(notifications);
        timer.record();
        notification
    }

    /// Sets the status of a notification, leaving every other field alone.
    pub async fn update_status(
        &self,
        id: u32,
        status: NotificationStatus,
    ) -> Result<Notification, StoreError> {
        let timer = OperationTimer::new("update_notification_status");
        let mut notifications = self.notifications.lock().await;

        let result = match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.status = status;
                Ok(notification.clone())
            }
            None => Err(StoreError::NotificationNotFound(id)),
        };

        drop(notifications);
        timer.record();
        result
    }
}
