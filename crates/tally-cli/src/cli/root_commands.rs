use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    BrandCommands, PermissionCommands, ProjectCommands, TaskCommands, TimeCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session.
    Login(LoginArgs),
    /// Remove the stored session.
    Logout,
    /// Show the signed-in user and what they may do.
    Whoami,
    /// Brands.
    Brand {
        #[command(subcommand)]
        action: BrandCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Tasks, the board, and the calendar.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// User administration.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Project permissions.
    Permission {
        #[command(subcommand)]
        action: PermissionCommands,
    },
    /// Time entries.
    Time {
        #[command(subcommand)]
        action: TimeCommands,
    },
    /// Dump JSON schema for an entity type.
    Schema(SchemaArgs),
}

/// Arguments for `tally login`.
#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

/// Arguments for `tally schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity type: task, user, brand, project, time-entry, permission, session
    pub type_name: String,
}
