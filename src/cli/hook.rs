use std::io::Read;
use std::process::ExitCode;

use crate::decision::{self, Verdict};
use crate::error::HookError;
use crate::protocol::HookInput;

/// Execute the hook subcommand: read JSON from stdin, evaluate, exit with the decision.
///
/// The exit status is the contract with the host:
/// - 0: allow the edit (nothing lintable, or the lint came back clean)
/// - 2: block the edit; a bounded finding summary goes to stderr
/// - 1: internal error (`Hook error: <message>` on stderr) — the host is
///   informed but the edit is not refused
///
/// Stdout stays untouched in every case.
pub fn run(linter: &str) -> ExitCode {
    match execute_from_stdin(linter) {
        Ok(Verdict::Allow) => ExitCode::SUCCESS,
        Ok(Verdict::Block { summary }) => {
            eprintln!("{summary}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Hook error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute_from_stdin(linter: &str) -> Result<Verdict, HookError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(HookError::Stdin)?;
    let hook_input: HookInput = serde_json::from_str(&input)?;
    decision::evaluate(&hook_input, linter)
}
