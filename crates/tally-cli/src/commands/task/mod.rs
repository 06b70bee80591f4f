mod board;
mod calendar;
mod create;
mod delete;
mod get;
mod list;
mod move_status;
mod update;

use std::sync::Arc;

use tally_board::TaskBoard;
use tally_core::Action;
use tally_core::dates::format_iso_date;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::ports::{ApiStatusHandler, ConsoleNotifier};

/// Handle `tally task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::List {
            project,
            status,
            limit,
        } => list::run(project.as_deref(), status.as_deref(), *limit, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Create {
            title,
            project,
            description,
            status,
            hours,
            due,
            assignee,
        } => {
            create::run(
                create::CreateTaskArgs {
                    title,
                    project,
                    description: description.as_deref(),
                    status: status.as_deref(),
                    hours: *hours,
                    due: due.as_deref(),
                    assignee: assignee.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Update {
            id,
            title,
            description,
            status,
            hours,
            due,
            assignee,
        } => {
            update::run(
                id,
                update::UpdateTaskArgs {
                    title: title.as_deref(),
                    description: description.as_deref(),
                    status: status.as_deref(),
                    hours: *hours,
                    due: due.as_deref(),
                    assignee: assignee.as_deref(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Delete { id } => delete::run(id, ctx, flags).await,
        TaskCommands::Move { id, status } => move_status::run(id, status, ctx, flags).await,
        TaskCommands::Board { project } => board::run(project.as_deref(), ctx, flags).await,
        TaskCommands::Calendar { project, month } => {
            calendar::run(project.as_deref(), month.as_deref(), ctx, flags).await
        }
    }
}

/// A board wired to the API and the terminal. Read-only for roles that may
/// not change task status.
fn board_for(ctx: &AppContext, flags: &GlobalFlags) -> TaskBoard {
    let pattern = ctx.config.general.date_format.clone();
    let board = TaskBoard::new(Arc::new(ConsoleNotifier::new(flags.quiet)))
        .with_date_formatter(Arc::new(move |raw: &str| format_iso_date(raw, &pattern)));

    let can_move = ctx
        .session
        .as_ref()
        .is_some_and(|session| session.can(Action::MoveTaskStatus));
    if can_move {
        board.with_handler(Arc::new(ApiStatusHandler::new(ctx.api.clone())))
    } else {
        board
    }
}
