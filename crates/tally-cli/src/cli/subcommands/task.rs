use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks.
    List {
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        project: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        hours: Option<f64>,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Assignee user ID
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Update a task.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        hours: Option<f64>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Delete a task.
    Delete { id: String },
    /// Move a task to another board column.
    Move {
        id: String,
        /// Target column: todo, in-progress, done
        status: String,
    },
    /// Show the three-column board.
    Board {
        #[arg(long)]
        project: Option<String>,
    },
    /// Show tasks on a month grid by due date.
    Calendar {
        #[arg(long)]
        project: Option<String>,
        /// Month to show, YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
}
