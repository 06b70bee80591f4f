use tally_core::Action;
use tally_core::enums::TaskStatus;
use tally_core::payloads::{TaskUpdate, TaskUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct UpdateTaskArgs<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: Option<&'a str>,
    pub hours: Option<f64>,
    pub due: Option<&'a str>,
    pub assignee: Option<&'a str>,
}

impl UpdateTaskArgs<'_> {
    fn into_payload(self) -> anyhow::Result<TaskUpdate> {
        let mut builder = TaskUpdateBuilder::new();
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(status) = self.status {
            builder = builder.status(parse_enum::<TaskStatus>(status, "status")?);
        }
        if let Some(hours) = self.hours {
            builder = builder.estimated_hours(hours);
        }
        if let Some(due) = self.due {
            builder = builder.due_date(parse_date(due, "due date")?);
        }
        if let Some(assignee) = self.assignee {
            builder = builder.assigned_user_id(assignee);
        }
        Ok(builder.build())
    }
}

pub async fn run(
    id: &str,
    args: UpdateTaskArgs<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(Action::EditTask)?;
    let update = args.into_payload()?;
    if update.status.is_some() {
        ctx.require(Action::MoveTaskStatus)?;
    }
    let task = ctx.api.update_task(id, &update).await?;
    output(&task, flags.format)
}
