//! Closed enums for task status, user role, and permission level.
//!
//! All enums use the API's `SCREAMING_SNAKE_CASE` wire form via
//! `#[serde(rename_all = "SCREAMING_SNAKE_CASE")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task. Doubles as the board column identifier.
///
/// Any status may move to any other status; the board is the only place that
/// requests transitions and it only refuses no-op moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Board column order, left to right.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Human-facing column title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role. Capability checks live in [`crate::capability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// Whether the role carries administrative rights at all.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PermissionLevel
// ---------------------------------------------------------------------------

/// Per-project access level granted to a user.
///
/// Levels are ordered: `View < Edit < Manage`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionLevel {
    View,
    Edit,
    Manage,
}

impl PermissionLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Edit => "EDIT",
            Self::Manage => "MANAGE",
        }
    }

    /// Whether this grant covers everything `required` covers.
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        self >= required
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(task_todo, TaskStatus, TaskStatus::Todo, "TODO");
    test_serde_roundtrip!(
        task_in_progress,
        TaskStatus,
        TaskStatus::InProgress,
        "IN_PROGRESS"
    );
    test_serde_roundtrip!(role_super_admin, Role, Role::SuperAdmin, "SUPER_ADMIN");
    test_serde_roundtrip!(role_user, Role, Role::User, "USER");
    test_serde_roundtrip!(
        permission_manage,
        PermissionLevel,
        PermissionLevel::Manage,
        "MANAGE"
    );

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_str::<TaskStatus>("\"BLOCKED\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn column_order_is_fixed() {
        assert_eq!(
            TaskStatus::ALL,
            [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
        );
    }

    #[test]
    fn titles_match_display_names() {
        assert_eq!(TaskStatus::Todo.title(), "To Do");
        assert_eq!(TaskStatus::InProgress.title(), "In Progress");
        assert_eq!(TaskStatus::Done.title(), "Done");
    }

    #[test]
    fn display_matches_wire_form() {
        for status in TaskStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn admin_roles() {
        assert!(Role::SuperAdmin.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn permission_levels_are_ordered() {
        assert!(PermissionLevel::Manage.satisfies(PermissionLevel::Edit));
        assert!(PermissionLevel::Edit.satisfies(PermissionLevel::Edit));
        assert!(!PermissionLevel::View.satisfies(PermissionLevel::Edit));
    }
}
