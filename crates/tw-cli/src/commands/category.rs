use tw_core::responses::DeletedResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tw category`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => {
            let categories = ctx.service.list_categories().await?;
            output(&categories, flags.format)
        }
        CategoryCommands::Add { name } => {
            let category = ctx.service.add_category(name).await?;
            output(&category, flags.format)
        }
        CategoryCommands::Delete { name } => {
            ctx.service.delete_category(name).await?;
            output(
                &DeletedResponse {
                    deleted: name.trim().to_string(),
                },
                flags.format,
            )
        }
    }
}
