use serde::Deserialize;
use serde_json::Value;

/// The request received from Claude Code on stdin for a PostToolUse hook.
///
/// Field names match the snake_case JSON that Claude Code sends.
/// Unknown fields are silently ignored for forward compatibility.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub tool_name: String,
    /// Tool-specific arguments. Defaults to JSON null when absent.
    #[serde(default)]
    pub tool_input: Value,
}

impl HookInput {
    /// The file path targeted by the tool call.
    ///
    /// Returns `""` when `tool_input.file_path` is absent, null, or not a
    /// string. An empty path never matches a lintable extension, so those
    /// requests all take the allow path.
    pub fn file_path(&self) -> &str {
        self.tool_input
            .get("file_path")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
