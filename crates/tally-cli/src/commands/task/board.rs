use tally_core::Action;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::board::{column_width, render_board};
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

pub async fn run(project: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(Action::ViewBoard)?;

    let spinner = Progress::spinner("Loading board...");
    let tasks = ctx.api.list_tasks(project).await?;
    spinner.finish_clear();

    let mut board = super::board_for(ctx, flags);
    board.set_tasks(tasks);
    let view = board.view();

    if flags.format == OutputFormat::Table {
        println!("{}", render_board(&view, column_width(ui::prefs().term_width)));
        Ok(())
    } else {
        output(&view, flags.format)
    }
}
