use std::path::PathBuf;

use clap::ValueEnum;

/// How command results are printed on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Flags accepted on every subcommand, copied out of [`super::Cli`].
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    /// Database file overriding `database.path`.
    pub db: Option<PathBuf>,
}
