use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::install::ResolvedInstallation;
use crate::registry::Entry;

#[derive(Debug)]
pub enum CommandSummary {
    List(ListSummary),
    Show(ShowSummary),
    CommandLine(CommandLineSummary),
    Render(RenderSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ListSummary {
    pub entries: Vec<Entry>,
    pub category: Option<String>,
    pub json: bool,
}

#[derive(Debug)]
pub struct ShowSummary {
    pub id: String,
    pub entry: Option<Entry>,
    pub json: bool,
}

#[derive(Debug)]
pub enum CommandLineOutcome {
    EntryNotFound,
    NoInstallation,
    Resolved(ResolvedInstallation),
}

#[derive(Debug)]
pub struct CommandLineSummary {
    pub id: String,
    pub outcome: CommandLineOutcome,
    pub json: bool,
}

#[derive(Debug)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub entry_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running mcpverse commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// `Failure` when the requested entry or installation was not found.
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }

    pub fn not_found(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Failure,
        }
    }
}
