use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

use super::types::{StepCommand, Termination};

/// Runs one command to completion and reports how it ended.
///
/// Implementations block until the process has terminated. A command that
/// cannot be started is reported as [`Termination::LaunchFailed`], never as
/// an error, so the caller can keep going with the next check.
pub trait Launcher {
    fn launch(&mut self, command: &StepCommand) -> Termination;
}

/// Launches commands as child processes of the current process.
///
/// The child inherits stdin, stdout and stderr, so the tool's own output
/// reaches the developer live and unmodified.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn spawn_and_wait(command: &StepCommand) -> Result<ExitStatus> {
        Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to invoke `{}`", command.program))
    }
}

impl Launcher for SystemLauncher {
    fn launch(&mut self, command: &StepCommand) -> Termination {
        match Self::spawn_and_wait(command) {
            Ok(status) => Termination::from(status),
            Err(e) => Termination::LaunchFailed(format!("{e:#}")),
        }
    }
}
