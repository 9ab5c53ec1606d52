use crate::process::StepCommand;

use super::types::CheckStep;

/// Build the `cargo clippy` invocation for the lint step.
pub fn clippy_command() -> StepCommand {
    StepCommand::new("cargo", ["clippy"])
}

/// Build the `cargo test` invocation for the test step.
pub fn test_command() -> StepCommand {
    StepCommand::new("cargo", ["test"])
}

/// The gate's fixed step list: lint first, then tests.
pub fn default_steps() -> Vec<CheckStep> {
    vec![
        CheckStep::new("lint", clippy_command()),
        CheckStep::new("test", test_command()),
    ]
}
