use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::UserSummary;
use crate::enums::PermissionLevel;

/// A per-project access grant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub level: PermissionLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}
