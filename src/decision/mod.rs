mod summary;

use std::path::Path;

use crate::error::HookError;
use crate::lint::{self, LintRun};
use crate::protocol::HookInput;

pub(crate) const APP_NAME: &str = "claude-lint-hook";

/// File extensions the gate lints. Anything else is allowed untouched.
const LINTABLE_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Outcome of evaluating one hook request.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Let the edit stand. Covers ineligible and missing files, clean lint
    /// runs, warning-only findings, and unparseable linter output.
    Allow,
    /// Refuse the edit; `summary` is written to stderr for the host.
    Block { summary: String },
}

/// Evaluate a hook request, invoking the linter when the file qualifies.
///
/// Flow: extract path → extension filter → existence check → run linter →
/// interpret its report. The linter subprocess is only spawned for an
/// eligible path that exists on disk.
///
/// # Examples
///
/// ```
/// use claude_lint_hook::decision::{evaluate, Verdict};
/// use claude_lint_hook::protocol::HookInput;
///
/// let input: HookInput = serde_json::from_str(
///     r#"{"tool_name":"Edit","tool_input":{"file_path":"app.py"}}"#,
/// ).unwrap();
///
/// // Non-JavaScript file → allow without invoking the linter
/// assert_eq!(evaluate(&input, "eslint").unwrap(), Verdict::Allow);
/// ```
pub fn evaluate(input: &HookInput, linter: &str) -> Result<Verdict, HookError> {
    let file_path = input.file_path();

    if !is_lintable(file_path) {
        return Ok(Verdict::Allow);
    }
    if !Path::new(file_path).exists() {
        return Ok(Verdict::Allow);
    }

    let run = lint::run_linter(linter, file_path)?;
    Ok(interpret(&run, file_path))
}

/// Whether the path ends in one of the lintable extensions.
fn is_lintable(path: &str) -> bool {
    LINTABLE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Turn a finished lint run into a verdict.
///
/// A zero exit is always clean. On non-zero exit the captured stdout is
/// parsed as a JSON report; parse failures and warning-only reports allow
/// (the linter's own breakage must not block the edit), while error-level
/// findings in the first file record block with a bounded summary.
pub(crate) fn interpret(run: &LintRun, file_path: &str) -> Verdict {
    if run.success {
        return Verdict::Allow;
    }

    let Some(report) = lint::parse_report(&run.stdout) else {
        return Verdict::Allow;
    };
    let Some(first) = report.first() else {
        return Verdict::Allow;
    };

    let errors = first.errors();
    if errors.is_empty() {
        return Verdict::Allow;
    }

    Verdict::Block {
        summary: summary::build_summary(file_path, &errors),
    }
}
