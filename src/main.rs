use std::env;
use std::process::ExitCode;

use anyhow::Result;

use hygiene::pipeline;
use hygiene::process::SystemLauncher;
use hygiene::report;

/// At least one check failed.
const GATE_FAILED: u8 = 1;
/// The gate itself could not run: bad arguments or an internal error.
const USAGE_OR_INTERNAL: u8 = 2;

fn main() -> ExitCode {
    if let Some(arg) = env::args_os().nth(1) {
        return match arg.to_str() {
            Some("help" | "--help" | "-h") => {
                print_usage();
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("hygiene: unexpected argument `{}`", arg.to_string_lossy());
                print_usage();
                ExitCode::from(USAGE_OR_INTERNAL)
            }
        };
    }

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(GATE_FAILED),
        Err(err) => {
            eprintln!("hygiene: {err:#}");
            ExitCode::from(USAGE_OR_INTERNAL)
        }
    }
}

/// Run lint and tests, print the summary, and report whether the gate passed.
fn run() -> Result<bool> {
    let steps = pipeline::default_steps();
    let outcome = pipeline::run_gate(&steps, &mut SystemLauncher)?;
    report::print_summary(&outcome);
    Ok(outcome.all_passed())
}

fn print_usage() {
    eprintln!("usage: hygiene");
    eprintln!("  runs `cargo clippy`, then `cargo test`, and exits non-zero if either fails");
}
