pub mod commands;
pub mod orchestrator;
mod types;

pub use commands::{clippy_command, default_steps, test_command};
pub use orchestrator::run_gate;
pub use types::{CheckResult, CheckStep, GateOutcome, Summary};
