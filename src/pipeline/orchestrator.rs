use std::time::Instant;

use anyhow::{Result, bail};

use crate::process::Launcher;

use super::types::{CheckResult, CheckStep, GateOutcome};

/// Run every step in order and aggregate the results.
///
/// Steps run one at a time; the next child is not started until the previous
/// one has terminated. A failing step never stops the run: every step gets
/// exactly one result, so the developer sees lint and test failures from a
/// single invocation.
pub fn run_gate<'a, L>(steps: &'a [CheckStep], launcher: &mut L) -> Result<GateOutcome<'a>>
where
    L: Launcher + ?Sized,
{
    if steps.is_empty() {
        bail!("no checks to run");
    }

    let results = steps
        .iter()
        .map(|step| run_step(step, launcher))
        .collect();

    Ok(GateOutcome::from_results(results))
}

fn run_step<'a, L>(step: &'a CheckStep, launcher: &mut L) -> CheckResult<'a>
where
    L: Launcher + ?Sized,
{
    let start = Instant::now();
    let termination = launcher.launch(&step.command);
    CheckResult {
        step,
        termination,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::process::{StepCommand, Termination};

    /// Replays scripted terminations and records every command it was asked
    /// to launch.
    struct StubLauncher {
        calls: Vec<StepCommand>,
        results: VecDeque<Termination>,
    }

    impl StubLauncher {
        fn with_results(results: Vec<Termination>) -> Self {
            Self {
                calls: Vec::new(),
                results: VecDeque::from(results),
            }
        }
    }

    impl Launcher for StubLauncher {
        fn launch(&mut self, command: &StepCommand) -> Termination {
            self.calls.push(command.clone());
            self.results
                .pop_front()
                .unwrap_or_else(|| Termination::LaunchFailed("missing stubbed result".into()))
        }
    }

    fn steps() -> Vec<CheckStep> {
        vec![
            CheckStep::new("lint", StepCommand::new("lint-tool", ["--check"])),
            CheckStep::new("test", StepCommand::new("test-tool", Vec::<String>::new())),
        ]
    }

    fn run(results: Vec<Termination>) -> (Vec<String>, bool, Vec<String>) {
        let steps = steps();
        let mut launcher = StubLauncher::with_results(results);
        let outcome = run_gate(&steps, &mut launcher).expect("non-empty steps");
        assert_eq!(outcome.results().len(), steps.len());
        let calls = launcher.calls.into_iter().map(|c| c.program).collect();
        let failed = outcome
            .failed_steps()
            .into_iter()
            .map(String::from)
            .collect();
        (calls, outcome.all_passed(), failed)
    }

    #[test]
    fn both_pass() {
        let (calls, passed, failed) = run(vec![Termination::Exited(0), Termination::Exited(0)]);
        assert_eq!(calls, vec!["lint-tool", "test-tool"]);
        assert!(passed);
        assert!(failed.is_empty());
    }

    #[test]
    fn lint_failure_still_runs_tests() {
        let (calls, passed, failed) = run(vec![Termination::Exited(1), Termination::Exited(0)]);
        assert_eq!(calls, vec!["lint-tool", "test-tool"]);
        assert!(!passed);
        assert_eq!(failed, vec!["lint"]);
    }

    #[test]
    fn test_failure_only() {
        let (_, passed, failed) = run(vec![Termination::Exited(0), Termination::Exited(2)]);
        assert!(!passed);
        assert_eq!(failed, vec!["test"]);
    }

    #[test]
    fn both_fail_in_declared_order() {
        let (_, passed, failed) = run(vec![Termination::Exited(1), Termination::Exited(1)]);
        assert!(!passed);
        assert_eq!(failed, vec!["lint", "test"]);
    }

    #[test]
    fn launch_failure_does_not_skip_remaining_steps() {
        let (calls, passed, failed) = run(vec![
            Termination::LaunchFailed("not found".into()),
            Termination::Exited(0),
        ]);
        assert_eq!(calls.len(), 2);
        assert!(!passed);
        assert_eq!(failed, vec!["lint"]);
    }

    #[test]
    fn signalled_step_fails() {
        let (_, passed, failed) = run(vec![Termination::Exited(0), Termination::Signalled(9)]);
        assert!(!passed);
        assert_eq!(failed, vec!["test"]);
    }

    #[test]
    fn launcher_receives_full_command() {
        let steps = steps();
        let mut launcher = StubLauncher::with_results(vec![Termination::Exited(0); 2]);
        run_gate(&steps, &mut launcher).expect("non-empty steps");
        assert_eq!(launcher.calls[0], steps[0].command);
        assert_eq!(launcher.calls[1], steps[1].command);
    }

    #[test]
    fn repeated_runs_agree() {
        let scripted = || vec![Termination::Exited(1), Termination::Exited(0)];
        let (_, first, _) = run(scripted());
        let (_, second, _) = run(scripted());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_step_list_is_rejected() {
        let mut launcher = StubLauncher::with_results(Vec::new());
        let err = run_gate(&[], &mut launcher).unwrap_err();
        assert!(err.to_string().contains("no checks"));
        assert!(launcher.calls.is_empty());
    }
}
