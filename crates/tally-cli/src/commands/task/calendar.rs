use anyhow::Context;
use chrono::Weekday;
use tally_board::{MonthGrid, YearMonth};
use tally_config::WeekStart;
use tally_core::Action;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::calendar::render_month;
use crate::output::output;
use crate::progress::Progress;

const fn first_weekday(week_start: WeekStart) -> Weekday {
    match week_start {
        WeekStart::Sunday => Weekday::Sun,
        WeekStart::Monday => Weekday::Mon,
    }
}

pub async fn run(
    project: Option<&str>,
    month: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require(Action::ViewBoard)?;

    let today = chrono::Local::now().date_naive();
    let month = match month {
        Some(raw) => raw.parse::<YearMonth>()?,
        None => YearMonth::containing(today),
    };

    let spinner = Progress::spinner("Loading tasks...");
    let tasks = ctx.api.list_tasks(project).await?;
    spinner.finish_clear();

    let grid = MonthGrid::build(month, first_weekday(ctx.config.general.week_start), today, &tasks)
        .with_context(|| format!("{month} is outside the supported date range"))?;

    if flags.format == OutputFormat::Table {
        println!("{}", render_month(&grid));
        Ok(())
    } else {
        output(&grid, flags.format)
    }
}
