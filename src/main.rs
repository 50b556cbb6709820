use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// ESLint gate hook for Claude Code file edits.
#[derive(Debug, Parser)]
#[command(name = "claude-lint-hook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a Claude Code PostToolUse hook (reads stdin, exit status carries the decision)
    Hook {
        /// Linter executable to invoke
        #[arg(long, default_value = "eslint")]
        linter: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hook { linter } => claude_lint_hook::run_hook(&linter),
    }
}
