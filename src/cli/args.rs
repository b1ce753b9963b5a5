//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: List registry entries
//! - `show`: Show a single entry
//! - `command`: Print the installation command line for an entry
//! - `render`: Render the registry as an HTML page
//! - `init`: Initialize the mcpverse configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::List(cmd)) => Some(&cmd.common),
            Some(Command::Show(cmd)) => Some(&cmd.common),
            Some(Command::Command(cmd)) => Some(&cmd.common),
            Some(Command::Render(cmd)) => Some(&cmd.common),
            Some(Command::Init) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by registry commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Registry JSON file (overrides config file)
    #[arg(long, env = "MCPVERSE_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only list entries in this category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Entry id
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the entry as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CommandLineCommand {
    /// Entry id
    pub id: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Value for a placeholder, as NAME=VALUE
    /// Can be specified multiple times: --var API_KEY=abc --var TEAM_ID=T1
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Fill declared variables from environment variables of the same name
    #[arg(long)]
    pub from_env: bool,

    /// Print the resolved command, args and variables as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output HTML file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title (overrides config file)
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all entries in the registry
    List(ListCommand),
    /// Show details of a single entry
    Show(ShowCommand),
    /// Print the installation command line for an entry
    Command(CommandLineCommand),
    /// Render the registry as an HTML page of cards
    Render(RenderCommand),
    /// Initialize a new .mcpverserc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}

fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got \"{}\"", raw))?;
    if name.is_empty() {
        return Err(format!("missing variable name in \"{}\"", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
