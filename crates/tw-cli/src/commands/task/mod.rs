mod add;
mod complete;
mod delete;
mod get;
mod list;
mod status;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `tw task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Add { text, no_wait } => add::run(text, *no_wait, ctx, flags).await,
        TaskCommands::List {
            status,
            category,
            due,
            tag,
            search,
            limit,
        } => {
            list::run(
                list::Params {
                    status: status.as_deref(),
                    category: category.as_deref(),
                    due: due.as_deref(),
                    tag: tag.as_deref(),
                    search: search.as_deref(),
                    limit: *limit,
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Update {
            id,
            title,
            description,
            clear_description,
            category,
            priority,
            minutes,
            due,
            due_at,
            clear_due,
            tags,
            clear_tags,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    clear_description: *clear_description,
                    category: category.clone(),
                    priority: priority.clone(),
                    minutes: *minutes,
                    due: due.clone(),
                    due_at: due_at.clone(),
                    clear_due: *clear_due,
                    tags: tags.clone(),
                    clear_tags: *clear_tags,
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
        TaskCommands::Complete { id } => complete::run(id, ctx, flags).await,
        TaskCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
