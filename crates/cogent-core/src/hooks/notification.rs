//! Notification handler: observe-only.

use tracing::info;

use super::types::{HookInput, HookOutput};

pub fn handle(input: &HookInput) -> HookOutput {
    info!(
        event = "core.hooks.notification_received",
        message = input.str_field("message").unwrap_or(""),
        severity = input.str_field("severity").unwrap_or("info"),
    );

    HookOutput::ok()
}
