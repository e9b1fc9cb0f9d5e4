// In memory implementation of the Notifier port.
//
// Purpose
// - Collect scheduled notifications per user for inspection in tests and local runs.

use crate::shared::infrastructure::notifier::{NotificationRequest, Notifier, NotifierError};
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryNotifier {
    scheduled: Mutex<HashMap<String, Vec<(String, NotificationRequest)>>>,
    is_offline: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn pending(&self, user_id: &str) -> Vec<NotificationRequest> {
        self.scheduled
            .lock()
            .await
            .get(user_id)
            .map(|items| items.iter().map(|(_, r)| r.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn schedule(
        &self,
        user_id: &str,
        request: NotificationRequest,
    ) -> Result<String, NotifierError> {
        if self.is_offline {
            return Err(NotifierError::Backend("Notifier offline".into()));
        }
        if request.after_seconds <= 0 {
            return Err(NotifierError::InvalidDelay(request.after_seconds));
        }
        let id = Uuid::now_v7().to_string();
        self.scheduled
            .lock()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push((id.clone(), request));
        Ok(id)
    }

    async fn cancel_all(&self, user_id: &str) -> Result<(), NotifierError> {
        if self.is_offline {
            return Err(NotifierError::Backend("Notifier offline".into()));
        }
        self.scheduled.lock().await.remove(user_id);
        Ok(())
    }
}
