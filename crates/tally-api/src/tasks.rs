//! Task endpoints.

use serde_json::Value;
use tally_core::entities::Task;
use tally_core::enums::TaskStatus;
use tally_core::payloads::{NewTask, TaskUpdate, TaskUpdateBuilder, Validate};

use crate::{ApiClient, error::ApiError, segment, with_query};

impl ApiClient {
    /// List tasks, optionally scoped to a project.
    ///
    /// Entries that do not decode as a [`Task`] (for instance an unknown
    /// status) are skipped with a warning instead of failing the whole list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a JSON
    /// array.
    pub async fn list_tasks(&self, project_id: Option<&str>) -> Result<Vec<Task>, ApiError> {
        let raw: Vec<Value> = self
            .get_json(&with_query("/tasks", &[("projectId", project_id)]))
            .await?;
        Ok(decode_tasks(raw))
    }

    /// Fetch a single task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        self.get_json(&format!("/tasks/{}", segment(id))).await
    }

    /// Create a task after validating it locally.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] without sending anything when the
    /// payload fails validation.
    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        task.validate()?;
        self.post_json("/tasks", task).await
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] for an empty or invalid update.
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, ApiError> {
        update.validate()?;
        self.put_json(&format!("/tasks/{}", segment(id)), update)
            .await
    }

    /// Persist a status change; the board's drop handler ends up here.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<Task, ApiError> {
        let update = TaskUpdateBuilder::new().status(status).build();
        self.update_task(id, &update).await
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/tasks/{}", segment(id))).await
    }
}

/// Decode each element on its own, dropping the ones that fail.
fn decode_tasks(raw: Vec<Value>) -> Vec<Task> {
    raw.into_iter()
        .filter_map(|value| {
            let id = value
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or("<missing id>")
                .to_string();
            serde_json::from_value::<Task>(value)
                .map_err(|error| {
                    tracing::warn!(task_id = %id, %error, "skipping malformed task from API");
                })
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"[
        { "id": "t1", "title": "Brief", "status": "TODO", "_count": { "timeEntries": 0 } },
        { "id": "t2", "title": "Legacy", "status": "ARCHIVED" },
        { "id": "t3", "title": "Ship", "status": "DONE", "estimatedHours": 1.5 },
        { "title": "No id", "status": "TODO" }
    ]"#;

    #[test]
    fn malformed_tasks_are_skipped() {
        let raw: Vec<Value> = serde_json::from_str(FIXTURE).unwrap();
        let tasks = decode_tasks(raw);
        let ids: Vec<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
    }

    #[test]
    fn input_order_is_preserved() {
        let raw: Vec<Value> = serde_json::from_str(
            r#"[
                { "id": "b", "title": "B", "status": "DONE" },
                { "id": "a", "title": "A", "status": "TODO" }
            ]"#,
        )
        .unwrap();
        let tasks = decode_tasks(raw);
        assert_eq!(tasks[0].id, "b");
        assert_eq!(tasks[1].id, "a");
    }
}
