use clap::Subcommand;

/// Tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// List distinct tags in use.
    List,
    /// Remove a tag from every task that carries it.
    Delete { tag: String },
}
