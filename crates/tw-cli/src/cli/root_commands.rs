use clap::{Args, Subcommand};

use crate::cli::subcommands::{CategoryCommands, TagCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Tags across all tasks.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// Built-in and custom categories.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Run a focus countdown for one task.
    Focus(FocusArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FocusArgs {
    /// Task to focus on (defaults to the highest-priority pending task)
    pub id: Option<String>,
    /// Session length in minutes (defaults to the task's estimate)
    #[arg(long)]
    pub minutes: Option<u32>,
}
