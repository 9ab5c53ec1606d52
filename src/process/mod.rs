// Process launching: the capability the gate uses to run one external check.

pub mod launch;
pub mod signal;
pub mod types;

pub use launch::{Launcher, SystemLauncher};
pub use signal::signal_name;
pub use types::{StepCommand, Termination};
