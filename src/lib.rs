pub mod decision;
pub mod lint;
pub mod protocol;

pub(crate) mod cli;

mod error;

pub use error::HookError;

/// Run the hook subcommand: read JSON from stdin, evaluate, exit with the decision.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Not a stable integration API —
/// callers should use [`decision::evaluate`] directly.
pub fn run_hook(linter: &str) -> std::process::ExitCode {
    cli::hook::run(linter)
}
