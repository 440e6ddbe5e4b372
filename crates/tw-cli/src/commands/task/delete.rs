use tw_core::responses::DeletedResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_task(id).await?;
    output(
        &DeletedResponse {
            deleted: id.to_string(),
        },
        flags.format,
    )
}
