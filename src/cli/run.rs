use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{command_line::command_line, init::init, list::list, render::render, show::show},
};

/// Dispatch parsed arguments to the matching command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to print and the exit status
/// - `Err` if the command fails (e.g., registry or config could not be loaded)
///
/// # Example
/// ```ignore
/// let args = Arguments::parse();
/// let result = run(args)?;
/// report::print(&result)?;
/// ```
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Command(cmd)) => command_line(cmd),
        Some(Command::Render(cmd)) => render(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
