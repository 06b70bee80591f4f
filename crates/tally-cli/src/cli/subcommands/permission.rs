use clap::Subcommand;

/// Project permission commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PermissionCommands {
    /// List permissions, optionally for one user.
    List {
        #[arg(long)]
        user: Option<String>,
    },
    /// Grant a user access to a project.
    Grant {
        #[arg(long)]
        user: String,
        #[arg(long)]
        project: String,
        /// Level: view, edit, manage
        #[arg(long, default_value = "view")]
        level: String,
    },
    /// Revoke a permission by ID.
    Revoke { id: String },
}
