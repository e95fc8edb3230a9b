//! Hook handlers for agent lifecycle events.
//!
//! Supported events and their local logic:
//!   - **SessionStart**: record the session context
//!   - **PreToolUse**: guard evaluation (the only hook that can block)
//!   - **PostToolUse**: observe-only
//!   - **Notification**: observe-only
//!
//! Every event is dispatched via [`dispatch`], which publishes the raw
//! payload to the bus before running the handler. Entry point:
//! `cogent hook <event-name>` (reads JSON from stdin).

pub mod dispatcher;
pub mod types;

mod notification;
mod post_tool_use;
mod pre_tool_use;
mod session_start;

pub use dispatcher::dispatch;
pub use types::{HookEvent, HookInput, HookOutput};
