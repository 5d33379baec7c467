mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanCommands;
use crate::context::AppContext;

/// Handle `vola plans <subcommand>`.
pub async fn handle(
    action: &PlanCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PlanCommands::List(args) => list::handle(args, ctx, flags).await,
        PlanCommands::Get(args) => get::handle(args, ctx, flags).await,
    }
}
