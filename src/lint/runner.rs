use std::process::{Command, Stdio};

use crate::error::HookError;

/// Captured outcome of one linter invocation.
#[derive(Debug)]
pub struct LintRun {
    /// Whether the child exited with status 0.
    pub success: bool,
    /// Captured stdout, lossily decoded. The JSON report when the linter
    /// honored `--format json`; arbitrary text otherwise.
    pub stdout: String,
}

/// Invoke the linter against a single file and wait for it to finish.
///
/// Runs `<linter> <file_path> --format json` with stdin closed and both
/// output streams piped, so the child never inherits the terminal. The
/// child runs to completion; there is no timeout.
///
/// Spawn/wait failures (executable not found, permission denied) surface as
/// [`HookError::LinterSpawn`] so the caller can take the non-blocking error
/// path.
pub fn run_linter(linter: &str, file_path: &str) -> Result<LintRun, HookError> {
    let output = Command::new(linter)
        .arg(file_path)
        .arg("--format")
        .arg("json")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| HookError::LinterSpawn {
            linter: linter.to_string(),
            source,
        })?;

    Ok(LintRun {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}
