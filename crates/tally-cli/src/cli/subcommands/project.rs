use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects, optionally for one brand.
    List {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a project under a brand.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        brand: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a project.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        brand: Option<String>,
    },
    /// Delete a project.
    Delete { id: String },
}
