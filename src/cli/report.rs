//! Report formatting and printing utilities.
//!
//! Results go to stdout, diagnostics to stderr. Separate from command logic
//! so the commands can be tested without capturing output.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandLineOutcome, CommandLineSummary, CommandResult, CommandSummary, InitSummary,
    ListSummary, RenderSummary, ShowSummary,
};
use crate::install::ResolvedInstallation;
use crate::registry::Entry;
use crate::render::EMPTY_REGISTRY_MESSAGE;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout and stderr.
pub fn print(result: &CommandResult) -> Result<()> {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) -> Result<()> {
    match &result.summary {
        CommandSummary::List(summary) => print_list(summary, out)?,
        CommandSummary::Show(summary) => print_show(summary, out, err)?,
        CommandSummary::CommandLine(summary) => print_command_line(summary, out, err)?,
        CommandSummary::Render(summary) => print_render(summary, out)?,
        CommandSummary::Init(summary) => print_init(summary, out)?,
    }
    Ok(())
}

fn print_list<W: Write>(summary: &ListSummary, out: &mut W) -> Result<()> {
    if summary.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary.entries)?)?;
        return Ok(());
    }

    if summary.entries.is_empty() {
        let msg = match &summary.category {
            Some(category) => format!("No MCPs found in category \"{}\".", category),
            None => EMPTY_REGISTRY_MESSAGE.to_string(),
        };
        writeln!(out, "{}", msg.dimmed())?;
        return Ok(());
    }

    let id_width = column_width(summary.entries.iter().map(|e| e.id.as_str()));
    let name_width = column_width(summary.entries.iter().map(|e| e.display_name()));
    let category_width = column_width(
        summary
            .entries
            .iter()
            .map(|e| e.category.as_deref().unwrap_or("")),
    );

    for entry in &summary.entries {
        let category = entry.category.as_deref().unwrap_or("");
        let line = format!(
            "{}  {}  {}",
            pad(&entry.id, id_width).bold(),
            pad(entry.display_name(), name_width),
            pad(category, category_width).cyan(),
        );
        let line = if entry.official {
            format!("{}  {}", line, format!("{} official", SUCCESS_MARK).green())
        } else {
            line
        };
        writeln!(out, "{}", line.trim_end())?;
    }

    let count = summary.entries.len();
    writeln!(
        out,
        "\n{}",
        format!("{} {}", count, if count == 1 { "entry" } else { "entries" }).dimmed()
    )?;
    Ok(())
}

fn print_show<W: Write, E: Write>(summary: &ShowSummary, out: &mut W, err: &mut E) -> Result<()> {
    let Some(entry) = &summary.entry else {
        print_not_found(&summary.id, err)?;
        return Ok(());
    };

    if summary.json {
        writeln!(out, "{}", serde_json::to_string_pretty(entry)?)?;
        return Ok(());
    }

    print_entry(entry, out)?;
    Ok(())
}

fn print_entry<W: Write>(entry: &Entry, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} ({})", entry.display_name().bold(), entry.id)?;
    if let Some(category) = &entry.category {
        writeln!(out, "  {:<12} {}", "Category:", category.cyan())?;
    }
    writeln!(
        out,
        "  {:<12} {}",
        "Official:",
        if entry.official { "yes" } else { "no" }
    )?;
    if let Some(description) = &entry.description {
        writeln!(out, "  {:<12} {}", "Description:", description)?;
    }
    if let Some(url) = &entry.readme_url {
        writeln!(out, "  {:<12} {}", "README:", url.underline())?;
    }

    let Some(installation) = &entry.installation else {
        writeln!(
            out,
            "  {:<12} {}",
            "Install:",
            "no installation information".dimmed()
        )?;
        return Ok(());
    };

    let command_line = crate::install::join_command_line(&installation.command, &installation.args);
    writeln!(out, "  {:<12} {}", "Install:", command_line)?;

    if !installation.variables.is_empty() {
        writeln!(out, "  Variables:")?;
        let width = column_width(installation.variables.keys().map(String::as_str));
        for (name, variable) in &installation.variables {
            let mut line = format!("    {}  {}", pad(name, width).bold(), variable.description);
            if let Some(placeholder) = &variable.placeholder {
                line.push_str(&format!(" (e.g., {})", placeholder));
            }
            if variable.secret {
                line.push_str(&format!(" {}", "[secret]".red()));
            }
            writeln!(out, "{}", line.trim_end())?;
        }
    }
    Ok(())
}

fn print_command_line<W: Write, E: Write>(
    summary: &CommandLineSummary,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match &summary.outcome {
        CommandLineOutcome::EntryNotFound => print_not_found(&summary.id, err)?,
        CommandLineOutcome::NoInstallation => {
            writeln!(
                err,
                "{} {}",
                FAILURE_MARK.red(),
                format!("MCP \"{}\" has no installation information", summary.id).red()
            )?;
        }
        CommandLineOutcome::Resolved(resolved) => {
            if summary.json {
                writeln!(out, "{}", serde_json::to_string_pretty(resolved)?)?;
            } else {
                writeln!(out, "{}", resolved.command_line())?;
            }
            print_unresolved(resolved, err)?;
        }
    }
    Ok(())
}

fn print_unresolved<E: Write>(resolved: &ResolvedInstallation, err: &mut E) -> io::Result<()> {
    for name in resolved.unresolved() {
        let secret = if resolved.is_secret(name) {
            " (secret)"
        } else {
            ""
        };
        writeln!(
            err,
            "{} <{}>{} has no value (use {})",
            "warning:".bold().yellow(),
            name,
            secret,
            format!("--var {}=...", name).cyan()
        )?;
    }
    Ok(())
}

fn print_render<W: Write>(summary: &RenderSummary, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Rendered {} {} to {}",
            summary.entry_count,
            if summary.entry_count == 1 { "entry" } else { "entries" },
            summary.output.display()
        )
        .green()
    )
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    )
}

fn print_not_found<E: Write>(id: &str, err: &mut E) -> io::Result<()> {
    writeln!(
        err,
        "{} {}",
        FAILURE_MARK.red(),
        format!("No MCP found with id \"{}\"", id).red()
    )
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Left-align `text` to a display width, accounting for wide characters.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
