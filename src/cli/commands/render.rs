use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use super::{CommandResult, CommandSummary, RenderSummary};
use crate::{
    cli::{args::RenderCommand, context::CommandContext},
    render::{render_error_page, render_page},
};

/// Render the registry to an HTML file.
///
/// When the registry can't be loaded, a static error page is written in its
/// place and the load error is still returned.
pub fn render(cmd: RenderCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new(&cmd.common)?;

    let output: PathBuf = match &cmd.output {
        Some(path) => ctx.cwd.join(path),
        None => ctx.config.output_path(),
    };
    let title = cmd
        .title
        .clone()
        .unwrap_or_else(|| ctx.config.config.title.clone());

    let registry = match ctx.registry() {
        Ok(registry) => registry,
        Err(err) => {
            write_page(&output, &render_error_page(&title)?)?;
            return Err(err.into());
        }
    };

    let entries = registry.list();
    write_page(&output, &render_page(&entries, &title)?)?;
    info!(output = %output.display(), entries = entries.len(), "rendered registry page");

    Ok(CommandResult::success(CommandSummary::Render(RenderSummary {
        output,
        entry_count: entries.len(),
    })))
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
