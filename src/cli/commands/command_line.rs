use std::env;

use anyhow::Result;
use tracing::debug;

use super::{CommandLineOutcome, CommandLineSummary, CommandResult, CommandSummary};
use crate::{
    cli::{args::CommandLineCommand, context::CommandContext},
    install::{EnvValues, resolve_args},
    registry::Entry,
};

pub fn command_line(cmd: CommandLineCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;
    let registry = ctx.registry()?;

    let outcome = match registry.get(&cmd.id) {
        None => CommandLineOutcome::EntryNotFound,
        Some(entry) => {
            let values = collect_values(entry, &cmd);
            match resolve_args(entry, &values) {
                Some(resolved) => CommandLineOutcome::Resolved(resolved),
                None => CommandLineOutcome::NoInstallation,
            }
        }
    };

    let resolved = matches!(outcome, CommandLineOutcome::Resolved(_));
    let summary = CommandSummary::CommandLine(CommandLineSummary {
        id: cmd.id,
        outcome,
        json: cmd.json,
    });

    Ok(if resolved {
        CommandResult::success(summary)
    } else {
        CommandResult::not_found(summary)
    })
}

/// Values from `--var`, plus declared variables found in the environment
/// when `--from-env` is set. Explicit `--var` values win.
fn collect_values(entry: &Entry, cmd: &CommandLineCommand) -> EnvValues {
    let mut values = EnvValues::new();

    if cmd.from_env
        && let Some(installation) = &entry.installation
    {
        for name in installation.variables.keys() {
            if let Ok(value) = env::var(name) {
                debug!(variable = %name, "using value from environment");
                values.insert(name.clone(), value);
            }
        }
    }

    values.extend(cmd.vars.iter().cloned());
    values
}
