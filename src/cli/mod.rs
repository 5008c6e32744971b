use anyhow::Result;

pub mod args;
mod exit_status;
mod run;
mod summary;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    // with_command_or_help guarantees a command here.
    let Some(command) = args.command else {
        return Ok(ExitStatus::Success);
    };

    run::run(command)
}
