use clap::Subcommand;

pub(crate) const COLUMN_NAMES: [&str; 3] = ["not-started", "in-progress", "completed"];

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a task in a project
    Add {
        /// Project ID
        project_id: String,

        /// Task title
        title: String,

        /// Section label (default: "Recently assigned")
        #[arg(long)]
        section: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,
    },

    /// List tasks of a project
    List {
        /// Project ID
        project_id: String,

        /// Show only overdue tasks
        #[arg(long)]
        overdue: bool,
    },

    /// Update a task's fields
    Update {
        /// Project ID
        project_id: String,

        /// Task ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: Option<String>,

        /// New section label
        #[arg(long)]
        section: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Project ID
        project_id: String,

        /// Task ID
        id: String,
    },

    /// Flip a task's completion flag
    Toggle {
        /// Project ID
        project_id: String,

        /// Task ID
        id: String,
    },

    /// Advance a task to the next status in the cycle
    Advance {
        /// Project ID
        project_id: String,

        /// Task ID
        id: String,
    },

    /// Set a task's status explicitly
    SetStatus {
        /// Project ID
        project_id: String,

        /// Task ID
        id: String,

        /// Target status
        #[arg(value_parser = COLUMN_NAMES)]
        status: String,
    },

    /// Move a task to another board column
    Move {
        /// Project ID
        project_id: String,

        /// Task ID
        id: String,

        /// Destination column
        #[arg(long, value_parser = COLUMN_NAMES)]
        to: String,

        /// Destination position within the column (default: 0)
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
}
