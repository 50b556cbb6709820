/// Failures that abort the hook without blocking the edit.
///
/// Every variant maps to the non-blocking error status (exit 1): the host is
/// told something went wrong, but the underlying operation is not refused.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),
    #[error("invalid hook input: {0}")]
    InvalidInput(#[from] serde_json::Error),
    #[error("failed to run '{linter}': {source}")]
    LinterSpawn {
        linter: String,
        source: std::io::Error,
    },
}
