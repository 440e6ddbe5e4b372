use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Tag { action } => commands::tag::handle(&action, ctx, flags).await,
        Commands::Category { action } => commands::category::handle(&action, ctx, flags).await,
        Commands::Focus(args) => commands::focus::handle(&args, ctx, flags).await,
    }
}
