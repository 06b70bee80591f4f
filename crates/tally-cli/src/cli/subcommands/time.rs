use clap::Subcommand;

/// Time entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TimeCommands {
    /// Log hours against a task.
    Log {
        #[arg(long)]
        task: String,
        #[arg(long)]
        hours: f64,
        /// Work date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List time entries.
    List {
        #[arg(long)]
        task: Option<String>,
        /// Filter by user (admins only; others always see their own)
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete a time entry.
    Delete { id: String },
    /// Total hours per user.
    Summary {
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
}
