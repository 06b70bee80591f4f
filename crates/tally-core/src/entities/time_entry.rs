use std::collections::HashMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::UserSummary;
use crate::dates::parse_iso_date;

/// Hours logged against a task on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub hours: f64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

impl TimeEntry {
    #[must_use]
    pub fn logged_on(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }
}

/// Sum of hours per user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserHours {
    pub user_id: String,
    pub name: Option<String>,
    pub hours: f64,
    pub entries: usize,
}

/// Total hours across `entries`.
#[must_use]
pub fn total_hours(entries: &[TimeEntry]) -> f64 {
    entries.iter().map(|entry| entry.hours).sum()
}

/// Per-user totals, largest first; ties keep first-seen order.
#[must_use]
pub fn hours_by_user(entries: &[TimeEntry]) -> Vec<UserHours> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<UserHours> = Vec::new();

    for entry in entries {
        let slot = *index.entry(entry.user_id.as_str()).or_insert_with(|| {
            totals.push(UserHours {
                user_id: entry.user_id.clone(),
                name: None,
                hours: 0.0,
                entries: 0,
            });
            totals.len() - 1
        });
        if let Some(total) = totals.get_mut(slot) {
            total.hours += entry.hours;
            total.entries += 1;
            if total.name.is_none() {
                total.name = entry.user.as_ref().map(|user| user.name.clone());
            }
        }
    }

    totals.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    totals
}
