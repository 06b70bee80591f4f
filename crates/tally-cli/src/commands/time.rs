use serde::Serialize;
use tally_api::time_entries::TimeEntryFilter;
use tally_core::Action;
use tally_core::entities::{UserHours, hours_by_user, total_hours};
use tally_core::payloads::NewTimeEntry;
use tally_session::Session;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::TimeCommands;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::{output, output_list};

#[derive(Serialize)]
struct TimeEntryRow<'a> {
    id: &'a str,
    date: &'a str,
    hours: f64,
    task_id: &'a str,
    user: &'a str,
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct Summary {
    total_hours: f64,
    users: Vec<UserHours>,
}

#[derive(Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

/// Handle `tally time`.
pub async fn handle(action: &TimeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TimeCommands::Log {
            task,
            hours,
            date,
            description,
        } => {
            ctx.require(Action::LogTime)?;
            let date = match date {
                Some(date) => parse_date(date, "date")?,
                None => chrono::Local::now().date_naive().to_string(),
            };
            let entry = ctx
                .api
                .log_time(&NewTimeEntry {
                    task_id: task.clone(),
                    hours: *hours,
                    date,
                    description: description.clone(),
                })
                .await?;
            output(&entry, flags.format)
        }
        TimeCommands::List {
            task,
            user,
            from,
            to,
            limit,
        } => {
            let session = ctx.require(Action::LogTime)?;
            let filter = TimeEntryFilter {
                task_id: task.as_deref(),
                user_id: visible_user(session, user.as_deref())?,
                from: from.as_deref(),
                to: to.as_deref(),
            };
            let mut entries = ctx.api.list_time_entries(filter).await?;
            apply_limit(
                &mut entries,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output_list(&entries, flags.format, |entry| TimeEntryRow {
                id: &entry.id,
                date: &entry.date,
                hours: entry.hours,
                task_id: &entry.task_id,
                user: entry
                    .user
                    .as_ref()
                    .map_or(entry.user_id.as_str(), |user| user.name.as_str()),
                description: entry.description.as_deref(),
            })
        }
        TimeCommands::Delete { id } => {
            ctx.require(Action::DeleteTimeEntry)?;
            ctx.api.delete_time_entry(id).await?;
            output(&Deleted { deleted: id }, flags.format)
        }
        TimeCommands::Summary { task, from, to } => {
            let session = ctx.require(Action::LogTime)?;
            let filter = TimeEntryFilter {
                task_id: task.as_deref(),
                user_id: visible_user(session, None)?,
                from: from.as_deref(),
                to: to.as_deref(),
            };
            let entries = ctx.api.list_time_entries(filter).await?;
            let summary = Summary {
                total_hours: total_hours(&entries),
                users: hours_by_user(&entries),
            };
            match flags.format {
                OutputFormat::Table => output(&summary.users, flags.format),
                _ => output(&summary, flags.format),
            }
        }
    }
}

/// Users without `ViewAllTimeEntries` only ever see their own entries.
fn visible_user<'a>(session: &'a Session, requested: Option<&'a str>) -> anyhow::Result<Option<&'a str>> {
    if session.can(Action::ViewAllTimeEntries) {
        return Ok(requested);
    }
    match requested {
        Some(user) if user != session.user.id => {
            session.require(Action::ViewAllTimeEntries)?;
            Ok(Some(user))
        }
        _ => Ok(Some(session.user.id.as_str())),
    }
}
