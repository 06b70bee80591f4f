use clap::Subcommand;

/// Brand commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BrandCommands {
    /// List brands.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a brand.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a brand.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a brand and everything under it.
    Delete { id: String },
}
