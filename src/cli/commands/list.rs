use anyhow::Result;

use super::{CommandResult, CommandSummary, ListSummary};
use crate::cli::{args::ListCommand, context::CommandContext};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let registry = ctx.registry()?;

    let entries = match &cmd.category {
        Some(category) => registry
            .list()
            .into_iter()
            .filter(|e| {
                e.category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .collect(),
        None => registry.list(),
    };

    Ok(CommandResult::success(CommandSummary::List(ListSummary {
        entries,
        category: cmd.category,
        json: cmd.json,
    })))
}
