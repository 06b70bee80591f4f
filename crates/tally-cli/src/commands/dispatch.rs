use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Whoami => commands::auth::whoami(ctx, flags),
        Commands::Brand { action } => commands::brand::handle(&action, ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Permission { action } => commands::permission::handle(&action, ctx, flags).await,
        Commands::Time { action } => commands::time::handle(&action, ctx, flags).await,
        Commands::Login(_) | Commands::Logout | Commands::Schema(_) => {
            unreachable!("login/logout/schema are pre-dispatched in main")
        }
    }
}
