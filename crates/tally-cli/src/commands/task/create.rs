use tally_core::Action;
use tally_core::enums::TaskStatus;
use tally_core::payloads::NewTask;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub project: &'a str,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub hours: Option<f64>,
    pub due: Option<&'a str>,
    pub assignee: Option<&'a str>,
}

impl CreateTaskArgs<'_> {
    fn into_payload(self) -> anyhow::Result<NewTask> {
        let mut task = NewTask::quick(self.title, self.project);
        task.description = self.description.map(str::to_string);
        task.status = self
            .status
            .map(|status| parse_enum::<TaskStatus>(status, "status"))
            .transpose()?
            .unwrap_or(TaskStatus::Todo);
        task.estimated_hours = self.hours;
        task.due_date = self.due.map(|due| parse_date(due, "due date")).transpose()?;
        task.assigned_user_id = self.assignee.map(str::to_string);
        Ok(task)
    }
}

pub async fn run(args: CreateTaskArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(Action::CreateTask)?;
    let task = ctx.api.create_task(&args.into_payload()?).await?;
    output(&task, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>() -> CreateTaskArgs<'a> {
        CreateTaskArgs {
            title: "Draft brief",
            project: "p1",
            description: None,
            status: None,
            hours: None,
            due: None,
            assignee: None,
        }
    }

    #[test]
    fn defaults_to_todo() {
        let task = args().into_payload().unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.project_id, "p1");
    }

    #[test]
    fn parses_status_and_due() {
        let task = CreateTaskArgs {
            status: Some("in-progress"),
            due: Some("2025-04-01"),
            ..args()
        }
        .into_payload()
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.due_date.as_deref(), Some("2025-04-01"));
    }

    #[test]
    fn rejects_bad_due_date() {
        let err = CreateTaskArgs {
            due: Some("next week"),
            ..args()
        }
        .into_payload()
        .unwrap_err();
        assert!(err.to_string().contains("invalid due date"));
    }
}
