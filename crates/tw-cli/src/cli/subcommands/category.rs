use clap::Subcommand;

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// List built-in categories followed by custom ones.
    List,
    /// Add a custom category.
    Add { name: String },
    /// Delete a custom category.
    Delete { name: String },
}
