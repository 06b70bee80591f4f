//! Time entry endpoints.

use tally_core::entities::TimeEntry;
use tally_core::payloads::{NewTimeEntry, Validate};

use crate::{ApiClient, error::ApiError, segment, with_query};

/// Filters for [`ApiClient::list_time_entries`]. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeEntryFilter<'a> {
    pub task_id: Option<&'a str>,
    pub user_id: Option<&'a str>,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
}

impl TimeEntryFilter<'_> {
    fn path(&self) -> String {
        with_query(
            "/time-entries",
            &[
                ("taskId", self.task_id),
                ("userId", self.user_id),
                ("from", self.from),
                ("to", self.to),
            ],
        )
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_time_entries(
        &self,
        filter: TimeEntryFilter<'_>,
    ) -> Result<Vec<TimeEntry>, ApiError> {
        self.get_json(&filter.path()).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an invalid payload.
    pub async fn log_time(&self, entry: &NewTimeEntry) -> Result<TimeEntry, ApiError> {
        entry.validate()?;
        self.post_json("/time-entries", entry).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_time_entry(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/time-entries/{}", segment(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_builds_query() {
        let filter = TimeEntryFilter {
            user_id: Some("u1"),
            from: Some("2025-03-01"),
            ..TimeEntryFilter::default()
        };
        assert_eq!(filter.path(), "/time-entries?userId=u1&from=2025-03-01");
        assert_eq!(TimeEntryFilter::default().path(), "/time-entries");
    }

    #[test]
    fn parse_time_entries() {
        let entries: Vec<TimeEntry> = serde_json::from_str(
            r#"[{
                "id": "e1", "taskId": "t1", "userId": "u1", "hours": 2,
                "date": "2025-03-05T00:00:00.000Z",
                "user": { "id": "u1", "name": "Ana", "email": "ana@example.com" }
            }]"#,
        )
        .unwrap();
        assert!((entries[0].hours - 2.0).abs() < f64::EPSILON);
        assert!(entries[0].logged_on().is_some());
    }
}
