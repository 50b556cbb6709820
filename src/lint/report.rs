use serde::Deserialize;

/// Severity value the linter assigns to error-level findings.
/// Warnings are 1 and never block.
pub const SEVERITY_ERROR: u8 = 2;

/// One per-file record in the linter's JSON report.
///
/// ESLint's `--format json` emits a top-level array of these. Only the
/// message list matters here; counters, rule ids, and source text are
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct FileReport {
    pub messages: Vec<LintMessage>,
}

/// A single finding within a file record.
#[derive(Debug, Deserialize)]
pub struct LintMessage {
    pub severity: u8,
    /// 1-based source line. Fatal messages can omit it; defaults to 0.
    #[serde(default)]
    pub line: u64,
    pub message: String,
}

impl FileReport {
    /// The error-level findings in this record, report order preserved.
    pub fn errors(&self) -> Vec<&LintMessage> {
        self.messages.iter().filter(|m| m.is_error()).collect()
    }
}

impl LintMessage {
    /// Whether this finding is error-level (severity exactly 2).
    pub fn is_error(&self) -> bool {
        self.severity == SEVERITY_ERROR
    }
}

/// Parse the linter's captured stdout as a JSON report.
///
/// Returns `None` on any parse failure — malformed linter output must never
/// itself block the edit, so callers treat `None` as "no findings".
pub fn parse_report(stdout: &str) -> Option<Vec<FileReport>> {
    serde_json::from_str(stdout).ok()
}
