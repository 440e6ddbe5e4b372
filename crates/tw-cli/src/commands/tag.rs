use tw_core::responses::TagRemovalResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::commands::shared::parse::hashtag;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tw tag`.
pub async fn handle(
    action: &TagCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TagCommands::List => {
            let tags = ctx.service.list_tags().await?;
            output(&tags, flags.format)
        }
        TagCommands::Delete { tag } => {
            let tag = hashtag(tag)?;
            let tasks_updated = ctx.service.remove_tag(&tag).await?;
            output(&TagRemovalResponse { tag, tasks_updated }, flags.format)
        }
    }
}
