//! Board ports wired to the API client and the terminal.

use async_trait::async_trait;
use tally_api::ApiClient;
use tally_board::{Notification, NotificationLevel, Notifier, StatusChangeError, StatusChangeHandler};
use tally_core::enums::TaskStatus;

/// Persists board moves with `PUT /tasks/{id}`.
pub struct ApiStatusHandler {
    api: ApiClient,
}

impl ApiStatusHandler {
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl StatusChangeHandler for ApiStatusHandler {
    async fn change_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), StatusChangeError> {
        self.api
            .update_task_status(task_id, status)
            .await
            .map(|_| ())
            .map_err(StatusChangeError::from_source)
    }
}

/// Prints notifications to stderr so stdout stays machine-readable.
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success if self.quiet => {}
            NotificationLevel::Success => eprintln!("✓ {}", notification.message),
            NotificationLevel::Error => eprintln!("✗ {}", notification.message),
        }
    }
}
