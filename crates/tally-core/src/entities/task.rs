use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::UserSummary;
use crate::dates::parse_iso_date;
use crate::enums::TaskStatus;

/// A unit of work shown on the board and the calendar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// ISO-8601 date or midnight timestamp, kept as sent.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub assigned_user: Option<UserSummary>,
    #[serde(default)]
    pub created_by_user: Option<UserSummary>,
    #[serde(rename = "_count", default)]
    pub count: TaskCounts,
}

impl Task {
    /// Parsed due date, if present and well-formed.
    #[must_use]
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_iso_date)
    }

    #[must_use]
    pub const fn time_entry_count(&self) -> u32 {
        self.count.time_entries
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    #[serde(default)]
    pub time_entries: u32,
}
