//! Hook dispatch: publish first, then run the event's local logic.
//!
//! Every event is forwarded to the bus regardless of what the handler
//! decides, so observers see denied tool calls too. Publishing is
//! fire-and-forget, so a dead bus never changes an exit code.

use cogent_config::CogentConfig;
use tracing::info;

use crate::events::publish_hook_event;

use super::types::{HookEvent, HookInput, HookOutput};
use super::{notification, post_tool_use, pre_tool_use, session_start};

/// Run one hook invocation end to end.
pub fn dispatch(event: HookEvent, input: &HookInput, config: &CogentConfig) -> HookOutput {
    info!(event = "core.hooks.dispatch_started", hook_event = event.name());

    publish_hook_event(config, event.name(), input.data.clone());

    match event {
        HookEvent::SessionStart => session_start::handle(input, config),
        HookEvent::PreToolUse => pre_tool_use::handle(input),
        HookEvent::PostToolUse => post_tool_use::handle(input),
        HookEvent::Notification => notification::handle(input),
    }
}
