use tw_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<TaskStatus>(status)?;
    let task = ctx.service.update_task_status(id, status).await?;
    output(&task, flags.format)
}
