//! Request bodies for create and update calls.
//!
//! Update payloads skip `None` fields so the server only touches what was
//! supplied. Every payload validates itself before it is sent.

use serde::Serialize;

use crate::dates::require_iso_date;
use crate::enums::{PermissionLevel, Role, TaskStatus};
use crate::errors::CoreError;

/// Client-side validation run before a request leaves the process.
pub trait Validate {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first offending field.
    fn validate(&self) -> Result<(), CoreError>;
}

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_positive_hours(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::validation(
            field,
            format!("must be a positive number of hours, got {value}"),
        ));
    }
    Ok(())
}

fn require_email(value: &str) -> Result<(), CoreError> {
    require_text("email", value)?;
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(())
    } else {
        Err(CoreError::validation("email", format!("'{value}' is not an email address")))
    }
}

// ---------------------------------------------------------------------------
// Brands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct NewBrand {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for NewBrand {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BrandUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for BrandUpdate {
    fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_none() && self.description.is_none() {
            return Err(CoreError::validation("update", "nothing to change"));
        }
        self.name.as_deref().map_or(Ok(()), |name| require_text("name", name))
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub brand_id: String,
}

impl Validate for NewProject {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_text("brandId", &self.brand_id)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
}

impl Validate for ProjectUpdate {
    fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_none() && self.description.is_none() && self.brand_id.is_none() {
            return Err(CoreError::validation("update", "nothing to change"));
        }
        self.name.as_deref().map_or(Ok(()), |name| require_text("name", name))
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
}

impl NewTask {
    /// A `TODO` task with only the required fields set.
    #[must_use]
    pub fn quick(title: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::Todo,
            estimated_hours: None,
            due_date: None,
            project_id: project_id.into(),
            assigned_user_id: None,
        }
    }
}

impl Validate for NewTask {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("projectId", &self.project_id)?;
        if let Some(hours) = self.estimated_hours {
            require_positive_hours("estimatedHours", hours)?;
        }
        if let Some(due) = self.due_date.as_deref() {
            require_iso_date(due)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<String>,
}

impl TaskUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.estimated_hours.is_none()
            && self.due_date.is_none()
            && self.assigned_user_id.is_none()
    }
}

impl Validate for TaskUpdate {
    fn validate(&self) -> Result<(), CoreError> {
        if self.is_empty() {
            return Err(CoreError::validation("update", "nothing to change"));
        }
        if let Some(title) = self.title.as_deref() {
            require_text("title", title)?;
        }
        if let Some(hours) = self.estimated_hours {
            require_positive_hours("estimatedHours", hours)?;
        }
        if let Some(due) = self.due_date.as_deref() {
            require_iso_date(due)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TaskUpdateBuilder(TaskUpdate);

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn estimated_hours(mut self, hours: f64) -> Self {
        self.0.estimated_hours = Some(hours);
        self
    }

    #[must_use]
    pub fn due_date(mut self, due: impl Into<String>) -> Self {
        self.0.due_date = Some(due.into());
        self
    }

    #[must_use]
    pub fn assigned_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.0.assigned_user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_email(&self.email)?;
        if self.password.chars().count() < 8 {
            return Err(CoreError::validation(
                "password",
                "must be at least 8 characters",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), CoreError> {
        if self.name.is_none() && self.email.is_none() && self.role.is_none() && self.password.is_none()
        {
            return Err(CoreError::validation("update", "nothing to change"));
        }
        if let Some(name) = self.name.as_deref() {
            require_text("name", name)?;
        }
        if let Some(email) = self.email.as_deref() {
            require_email(email)?;
        }
        if self
            .password
            .as_deref()
            .is_some_and(|password| password.chars().count() < 8)
        {
            return Err(CoreError::validation(
                "password",
                "must be at least 8 characters",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Time entries and permissions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub task_id: String,
    pub hours: f64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for NewTimeEntry {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("taskId", &self.task_id)?;
        require_positive_hours("hours", self.hours)?;
        if self.hours > 24.0 {
            return Err(CoreError::validation("hours", "cannot exceed 24 in one day"));
        }
        require_iso_date(&self.date)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPermission {
    pub user_id: String,
    pub project_id: String,
    pub level: PermissionLevel,
}

impl Validate for NewPermission {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("userId", &self.user_id)?;
        require_text("projectId", &self.project_id)
    }
}
