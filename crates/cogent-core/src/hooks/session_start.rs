//! SessionStart handler: record the session context.
//!
//! Publishing already happened in the dispatcher; the only local work is
//! appending the session context to the runtime-provided persistence
//! file when one is configured. Best-effort: a write failure is logged
//! and the hook still exits 0.

use cogent_config::CogentConfig;
use tracing::{info, warn};

use crate::session::SessionContext;

use super::types::{HookInput, HookOutput};

pub fn handle(input: &HookInput, config: &CogentConfig) -> HookOutput {
    let context = SessionContext::from_payload(&input.data);

    info!(
        event = "core.hooks.session_started",
        session_id = %context.session_id,
        source = input.str_field("source").unwrap_or("unknown"),
    );

    if let Some(path) = &config.session_env_file {
        if let Err(e) = context.record(path) {
            warn!(event = "core.hooks.session_context_write_failed", error = %e);
        }
    }

    HookOutput::ok()
}
