use crate::{
    auth_commands::AuthCommands, project_commands::ProjectCommands, task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Authentication and session operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Show a project's kanban board
    Board {
        /// Project ID
        project_id: String,

        /// Hide completed tasks (and stray cards whose completion flag
        /// disagrees with their column)
        #[arg(long)]
        hide_completed: bool,
    },
}
