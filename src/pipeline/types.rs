use std::time::Duration;

use crate::process::{StepCommand, Termination};

/// One external quality check, e.g. the linter or the test suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStep {
    pub name: String,
    pub command: StepCommand,
}

impl CheckStep {
    pub fn new(name: impl Into<String>, command: StepCommand) -> Self {
        Self {
            name: name.into(),
            command,
        }
    }
}

/// Outcome of running one [`CheckStep`].
#[derive(Debug, Clone)]
pub struct CheckResult<'a> {
    pub step: &'a CheckStep,
    pub termination: Termination,
    pub elapsed: Duration,
}

impl CheckResult<'_> {
    pub fn exit_code(&self) -> Option<i32> {
        self.termination.exit_code()
    }

    pub fn succeeded(&self) -> bool {
        self.termination.succeeded()
    }
}

/// Check counts, in the same shape the validation report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Aggregate over every result of one gate run.
#[derive(Debug, Clone)]
pub struct GateOutcome<'a> {
    results: Vec<CheckResult<'a>>,
}

impl<'a> GateOutcome<'a> {
    /// Aggregate results, which must be in execution order.
    pub fn from_results(results: Vec<CheckResult<'a>>) -> Self {
        Self { results }
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(CheckResult::succeeded)
    }

    /// Names of failed steps, in execution order.
    pub fn failed_steps(&self) -> Vec<&'a str> {
        self.results
            .iter()
            .filter(|r| !r.succeeded())
            .map(|r| r.step.name.as_str())
            .collect()
    }

    pub fn results(&self) -> &[CheckResult<'a>] {
        &self.results
    }

    pub fn summary(&self) -> Summary {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.succeeded()).count();
        Summary {
            total,
            passed,
            failed: total - passed,
        }
    }
}
