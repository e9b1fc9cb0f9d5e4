// Notification port: deferred local notifications per user.
//
// Boundaries
// - The port keeps no memory of earlier schedules for the caller; callers cancel before rescheduling.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub after_seconds: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifierError {
    #[error("delay must be positive, got {0}s")]
    InvalidDelay(i64),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the identifier the backend assigned to the scheduled notification.
    async fn schedule(
        &self,
        user_id: &str,
        request: NotificationRequest,
    ) -> Result<String, NotifierError>;

    async fn cancel_all(&self, user_id: &str) -> Result<(), NotifierError>;
}

pub mod in_memory;
