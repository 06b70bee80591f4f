use serde::Serialize;
use tally_board::columns::column_for;
use tally_board::{CommitResult, DropOutcome};
use tally_core::Action;
use tally_core::entities::Task;
use tally_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveResponse {
    task_id: String,
    from: TaskStatus,
    to: TaskStatus,
    moved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<Task>,
}

/// Move a task between board columns, the same path a drag-and-drop takes.
pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(Action::MoveTaskStatus)?;
    let target = parse_enum::<TaskStatus>(status, "status")?;

    let task = ctx.api.get_task(id).await?;
    let from = task.status;

    let mut board = super::board_for(ctx, flags);
    board.set_tasks(vec![task]);
    if !board.start_drag(id) {
        anyhow::bail!("task '{id}' is not on the board");
    }
    board.drag_enter(target);

    let moved = match board.drop_on(target) {
        DropOutcome::SameColumn => {
            if let Some(note) = same_column_note(target, flags.verbose) {
                eprintln!("{note}");
            }
            false
        }
        DropOutcome::Pending(pending) => match pending.commit().await {
            CommitResult::Moved | CommitResult::Detached { succeeded: true } => true,
            CommitResult::Failed(_) | CommitResult::Detached { succeeded: false } => {
                anyhow::bail!("task '{id}' was not moved");
            }
        },
        outcome => anyhow::bail!("task '{id}' could not be moved ({outcome:?})"),
    };

    let task = if moved {
        Some(ctx.api.get_task(id).await?)
    } else {
        None
    };
    output(
        &MoveResponse {
            task_id: id.to_string(),
            from,
            to: target,
            moved,
            task,
        },
        flags.format,
    )
}

/// A drop on the current column is silent unless `--verbose` asks for detail.
fn same_column_note(status: TaskStatus, verbose: bool) -> Option<String> {
    verbose.then(|| format!("Task is already in {}", column_for(status).title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_column_drop_is_silent_by_default() {
        assert_eq!(same_column_note(TaskStatus::Done, false), None);
    }

    #[test]
    fn same_column_drop_is_reported_when_verbose() {
        assert_eq!(
            same_column_note(TaskStatus::InProgress, true).as_deref(),
            Some("Task is already in In Progress")
        );
    }
}
