// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Linter path that cannot exist. Tests whose scenario must never reach the
/// linter pass it so an unexpected spawn shows up as an error exit.
pub const UNREACHABLE_LINTER: &str = "/nonexistent/claude-lint-hook-test-linter";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_claude-lint-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn run_hook(stdin_input: &str) -> (String, String, i32) {
    run_hook_with_linter(stdin_input, UNREACHABLE_LINTER)
}

/// Runs the hook subcommand with the given stdin and linter override.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook_with_linter(stdin_input: &str, linter: &str) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .arg("hook")
        .arg("--linter")
        .arg(linter)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn make_input_json(tool_name: &str, file_path: &str) -> String {
    serde_json::json!({
        "tool_name": tool_name,
        "tool_input": {"file_path": file_path}
    })
    .to_string()
}

/// Writes an executable fake linter script into `dir` and returns its path.
///
/// The body runs under `/bin/sh` with the lint target as `$1`.
pub fn fake_linter(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-linter");
    let mut file = std::fs::File::create(&path).expect("failed to create fake linter");
    writeln!(file, "#!/bin/sh").expect("failed to write shebang");
    file.write_all(body.as_bytes())
        .expect("failed to write fake linter body");
    drop(file);

    let mut perms = std::fs::metadata(&path)
        .expect("failed to stat fake linter")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("failed to chmod fake linter");
    path
}

/// Creates a file under `dir` so the hook's existence check passes.
pub fn touch_source_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, "export {};\n").expect("failed to write source file");
    path
}
