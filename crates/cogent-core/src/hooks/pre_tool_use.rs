//! PreToolUse handler: run the guard over the pending tool call.
//!
//! The only hook that can block: a deny exits 2 with the reason on
//! stderr, which the host runtime surfaces to the agent. Missing fields
//! degrade to the allow path.

use serde_json::Value;
use tracing::info;

use crate::guard::{self, Decision};

use super::types::{HookInput, HookOutput};

pub fn handle(input: &HookInput) -> HookOutput {
    let tool_name = input.str_field("tool_name").unwrap_or("");
    let empty = Value::Object(Default::default());
    let tool_input = input.data.get("tool_input").unwrap_or(&empty);

    match guard::evaluate(tool_name, tool_input) {
        Decision::Allow => {
            info!(event = "core.hooks.tool_allowed", tool = tool_name);
            HookOutput::ok()
        }
        Decision::Deny { rule, reason } => {
            eprintln!("cogent guard: blocked {tool_name}: {reason} [{rule}]");
            HookOutput::block()
        }
    }
}
