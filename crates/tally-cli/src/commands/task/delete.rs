use serde::Serialize;
use tally_core::Action;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require(Action::DeleteTask)?;
    ctx.api.delete_task(id).await?;
    output(&Deleted { deleted: id }, flags.format)
}
