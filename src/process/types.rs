use std::fmt;
use std::process::ExitStatus;

use super::signal::signal_name;

/// Program plus ordered argument list. The program is resolved through the
/// operating system's `PATH` lookup at launch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl StepCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Shell-quoted command line, for display only.
    pub fn command_line(&self) -> String {
        shell_words::join(std::iter::once(&self.program).chain(&self.args))
    }
}

/// How a launched check ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// The process exited normally with this status code.
    Exited(i32),
    /// The process was killed by a signal.
    Signalled(i32),
    /// The process could not be started at all.
    LaunchFailed(String),
}

impl Termination {
    /// Status code of a normal exit. `None` for signals and launch failures.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exited(code) => Some(*code),
            Self::Signalled(_) | Self::LaunchFailed(_) => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code() == Some(0)
    }
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Signalled(terminating_signal(status)),
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or_default()
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> i32 {
    0
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exit code {code}"),
            Self::Signalled(signal) => match signal_name(*signal) {
                Some(name) => write!(f, "killed by signal {signal} ({name})"),
                None => write!(f, "killed by signal {signal}"),
            },
            Self::LaunchFailed(reason) => write!(f, "could not start: {reason}"),
        }
    }
}
