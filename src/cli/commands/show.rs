use anyhow::Result;

use super::{CommandResult, CommandSummary, ShowSummary};
use crate::cli::{args::ShowCommand, context::CommandContext};

pub fn show(cmd: ShowCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let entry = ctx.registry()?.get(&cmd.id).cloned();

    let found = entry.is_some();
    let summary = CommandSummary::Show(ShowSummary {
        id: cmd.id,
        entry,
        json: cmd.json,
    });

    Ok(if found {
        CommandResult::success(summary)
    } else {
        CommandResult::not_found(summary)
    })
}
