use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Get a project by ID
    Get {
        /// Project ID
        id: String,
    },

    /// Create a new project
    Create {
        /// Project name
        name: String,

        /// Project description
        #[arg(long)]
        description: Option<String>,

        /// Display color (hex, e.g. #0EA5E9)
        #[arg(long)]
        color: Option<String>,
    },

    /// Update a project
    Update {
        /// Project ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New display color
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a project and all of its tasks
    Delete {
        /// Project ID
        id: String,
    },

    /// Show a project's stepped completion percentage
    Progress {
        /// Project ID
        id: String,
    },
}
