use tally_core::Action;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(Action::ViewBoard)?;
    let task = ctx.api.get_task(id).await?;
    output(&task, flags.format)
}
