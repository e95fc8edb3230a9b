//! PostToolUse handler: observe-only.

use tracing::info;

use super::types::{HookInput, HookOutput};

pub fn handle(input: &HookInput) -> HookOutput {
    let tool_name = input.str_field("tool_name").unwrap_or("unknown");
    let success = input
        .data
        .get("tool_response")
        .and_then(|r| r.get("success"))
        .and_then(|v| v.as_bool())
        .unwrap_or(true);

    info!(
        event = "core.hooks.tool_completed",
        tool = tool_name,
        success = success,
    );

    HookOutput::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exits_zero_for_empty_input() {
        let output = handle(&HookInput { data: json!({}) });
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_exits_zero_for_full_input() {
        let output = handle(&HookInput {
            data: json!({
                "tool_name": "Bash",
                "tool_response": {"success": false, "output": "boom"}
            }),
        });
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_exits_zero_for_non_object_input() {
        let output = handle(&HookInput { data: json!("text") });
        assert_eq!(output.exit_code, 0);
    }
}
