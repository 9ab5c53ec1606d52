//! Final gate summary: one line per check, then the totals.

use std::time::Duration;

use crate::pipeline::{CheckResult, GateOutcome};

const PREFIX: &str = "hygiene";

/// Render the summary printed after every check has run.
pub fn render_summary(outcome: &GateOutcome<'_>) -> Vec<String> {
    let mut lines: Vec<String> = outcome.results().iter().map(render_result).collect();

    let summary = outcome.summary();
    let checks = if summary.total == 1 { "check" } else { "checks" };
    let mut totals = format!(
        "{PREFIX}: {} {checks}, {} passed, {} failed",
        summary.total, summary.passed, summary.failed
    );
    let failed = outcome.failed_steps();
    if !failed.is_empty() {
        totals.push_str(&format!(" ({})", failed.join(", ")));
    }
    lines.push(totals);
    lines
}

/// Write the summary to stderr, after the tools' own output.
pub fn print_summary(outcome: &GateOutcome<'_>) {
    for line in render_summary(outcome) {
        eprintln!("{line}");
    }
}

fn render_result(result: &CheckResult<'_>) -> String {
    let step = result.step;
    let elapsed = format_elapsed(result.elapsed);
    if result.succeeded() {
        format!(
            "{PREFIX}: {} ({}) passed in {elapsed}",
            step.name,
            step.command.command_line()
        )
    } else {
        format!(
            "{PREFIX}: {} ({}) failed: {}, after {elapsed}",
            step.name,
            step.command.command_line(),
            result.termination
        )
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}s", elapsed.as_secs_f64())
}
