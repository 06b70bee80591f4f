//! Role-based capability checks.
//!
//! Every command that mutates server state asks [`can`] first, so the rules
//! for who may do what live in exactly one match.

use std::fmt;

use crate::enums::Role;

/// Something a signed-in user may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewBoard,
    ManageBrands,
    ManageProjects,
    CreateTask,
    EditTask,
    DeleteTask,
    MoveTaskStatus,
    LogTime,
    ViewAllTimeEntries,
    DeleteTimeEntry,
    ManageUsers,
    /// Create, edit, or remove accounts that hold `SUPER_ADMIN`.
    ManageAdmins,
    AssignPermissions,
}

impl Action {
    pub const ALL: [Self; 13] = [
        Self::ViewBoard,
        Self::ManageBrands,
        Self::ManageProjects,
        Self::CreateTask,
        Self::EditTask,
        Self::DeleteTask,
        Self::MoveTaskStatus,
        Self::LogTime,
        Self::ViewAllTimeEntries,
        Self::DeleteTimeEntry,
        Self::ManageUsers,
        Self::ManageAdmins,
        Self::AssignPermissions,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewBoard => "view the board",
            Self::ManageBrands => "manage brands",
            Self::ManageProjects => "manage projects",
            Self::CreateTask => "create tasks",
            Self::EditTask => "edit tasks",
            Self::DeleteTask => "delete tasks",
            Self::MoveTaskStatus => "change task status",
            Self::LogTime => "log time",
            Self::ViewAllTimeEntries => "view all time entries",
            Self::DeleteTimeEntry => "delete time entries",
            Self::ManageUsers => "manage users",
            Self::ManageAdmins => "manage super admins",
            Self::AssignPermissions => "assign permissions",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `role` is allowed to perform `action`.
#[must_use]
pub const fn can(role: Role, action: Action) -> bool {
    match role {
        Role::SuperAdmin => true,
        Role::Admin => !matches!(action, Action::ManageAdmins),
        Role::User => matches!(
            action,
            Action::ViewBoard
                | Action::CreateTask
                | Action::EditTask
                | Action::MoveTaskStatus
                | Action::LogTime
        ),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const ALL_ACTIONS: [Action; 13] = Action::ALL;

    #[test]
    fn super_admin_can_do_everything() {
        assert!(ALL_ACTIONS.iter().all(|action| can(Role::SuperAdmin, *action)));
    }

    #[test]
    fn admin_cannot_manage_super_admins() {
        assert!(!can(Role::Admin, Action::ManageAdmins));
        let allowed = ALL_ACTIONS
            .iter()
            .filter(|action| can(Role::Admin, **action))
            .count();
        assert_eq!(allowed, ALL_ACTIONS.len() - 1);
    }

    #[rstest]
    #[case(Action::ViewBoard, true)]
    #[case(Action::CreateTask, true)]
    #[case(Action::EditTask, true)]
    #[case(Action::MoveTaskStatus, true)]
    #[case(Action::LogTime, true)]
    #[case(Action::DeleteTask, false)]
    #[case(Action::ManageBrands, false)]
    #[case(Action::ManageProjects, false)]
    #[case(Action::ManageUsers, false)]
    #[case(Action::AssignPermissions, false)]
    #[case(Action::ViewAllTimeEntries, false)]
    #[case(Action::DeleteTimeEntry, false)]
    fn plain_user_capabilities(#[case] action: Action, #[case] expected: bool) {
        assert_eq!(can(Role::User, action), expected);
    }

    #[test]
    fn everything_a_user_can_do_an_admin_can_do() {
        for action in ALL_ACTIONS {
            if can(Role::User, action) {
                assert!(can(Role::Admin, action), "admin lost {action}");
            }
        }
    }
}
