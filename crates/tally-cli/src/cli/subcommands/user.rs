use clap::Subcommand;

/// User administration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a user.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Role: user, admin, super-admin
        #[arg(long, default_value = "user")]
        role: String,
    },
    /// Update a user.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user.
    Delete { id: String },
}
