use tw_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx
        .service
        .update_task_status(id, TaskStatus::Completed)
        .await?;
    output(&task, flags.format)
}
