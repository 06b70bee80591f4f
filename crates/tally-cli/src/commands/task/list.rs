use serde::Serialize;
use tally_core::Action;
use tally_core::dates::format_iso_date;
use tally_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output_list;

#[derive(Serialize)]
struct TaskRow<'a> {
    id: &'a str,
    title: &'a str,
    status: TaskStatus,
    due: Option<String>,
    assignee: Option<&'a str>,
    hours: Option<f64>,
}

pub async fn run(
    project: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(Action::ViewBoard)?;
    let status = status
        .map(|status| parse_enum::<TaskStatus>(status, "status"))
        .transpose()?;

    let mut tasks = ctx.api.list_tasks(project).await?;
    if let Some(status) = status {
        tasks.retain(|task| task.status == status);
    }
    apply_limit(
        &mut tasks,
        effective_limit(limit, flags.limit, ctx.config.general.default_limit),
    );

    let pattern = ctx.config.general.date_format.as_str();
    output_list(&tasks, flags.format, |task| TaskRow {
        id: &task.id,
        title: &task.title,
        status: task.status,
        due: task.due_date.as_deref().map(|raw| format_iso_date(raw, pattern)),
        assignee: task.assigned_user.as_ref().map(|user| user.name.as_str()),
        hours: task.estimated_hours,
    })
}
