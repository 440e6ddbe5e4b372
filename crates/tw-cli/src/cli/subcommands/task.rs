use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Capture a task from free text; fields are filled in by extraction.
    Add {
        /// The note, e.g. "call mom tomorrow at 5pm"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the placeholder without waiting for extraction output
        #[arg(long)]
        no_wait: bool,
    },
    /// List tasks, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// overdue, today, tomorrow, this_week, next_week
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Case-insensitive match on title and description
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Edit task fields.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long)]
        clear_description: bool,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// Estimated duration in minutes
        #[arg(long)]
        minutes: Option<u32>,
        /// Due date, YYYY-MM-DD
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Due date and time, YYYY-MM-DDTHH:MM
        #[arg(long, conflicts_with = "clear_due")]
        due_at: Option<String>,
        /// Remove both due fields
        #[arg(long)]
        clear_due: bool,
        /// Replace the tag set (repeatable)
        #[arg(long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,
        #[arg(long)]
        clear_tags: bool,
    },
    /// Set a task's status (pending, in_progress, completed).
    Status { id: String, status: String },
    /// Mark a task completed.
    Complete { id: String },
    /// Delete a task.
    Delete { id: String },
}
