//! Port through which the board persists status changes.

use async_trait::async_trait;
use tally_core::enums::TaskStatus;

/// Persists a task's new status.
///
/// The board calls this once per accepted drop and never retries. It does
/// not touch its own task list; the host re-supplies tasks once the change
/// has landed.
#[async_trait]
pub trait StatusChangeHandler: Send + Sync {
    async fn change_status(
        &self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), StatusChangeError>;
}

/// Failure reported by a [`StatusChangeHandler`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct StatusChangeError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StatusChangeError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, using its display text as the message.
    #[must_use]
    pub fn from_source(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn wrapped_source_is_preserved() {
        let io = std::io::Error::other("connection reset");
        let err = StatusChangeError::from_source(io);
        assert_eq!(err.message(), "connection reset");
        assert!(err.source().is_some());
    }

    #[test]
    fn plain_message_has_no_source() {
        let err = StatusChangeError::new("rejected");
        assert_eq!(err.to_string(), "rejected");
        assert!(err.source().is_none());
    }
}
