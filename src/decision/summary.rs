use crate::lint::LintMessage;

use super::APP_NAME;

/// Findings shown in full before the summary truncates.
const MAX_PREVIEW: usize = 3;

/// Build the stderr summary for a blocking verdict.
///
/// One header line with the error count and file path, then up to
/// `MAX_PREVIEW` findings formatted as `  Line <N>: <message>`.
pub(crate) fn build_summary(file_path: &str, errors: &[&LintMessage]) -> String {
    let mut summary = format!("{APP_NAME}: {} error(s) in {}", errors.len(), file_path);
    for finding in errors.iter().take(MAX_PREVIEW) {
        summary.push_str(&format!("\n  Line {}: {}", finding.line, finding.message));
    }
    summary
}
