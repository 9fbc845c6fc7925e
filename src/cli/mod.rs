use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

mod args;
mod commands;
mod context;
mod exit_status;
mod report;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Languages(cmd)) => commands::languages::languages(cmd),
        Some(Command::Resolve(cmd)) => commands::resolve::resolve(cmd),
        Some(Command::Translate(cmd)) => commands::translate::translate(cmd),
        Some(Command::Set(cmd)) => commands::set::set(cmd),
        Some(Command::Check(cmd)) => commands::check::check(cmd),
        Some(Command::Init) => commands::init::init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
