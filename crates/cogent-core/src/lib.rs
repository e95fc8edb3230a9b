//! cogent-core: Core library for the Cogent hook bridge
//!
//! This library sits between an AI coding agent runtime and a NATS
//! message bus. It is used by the `cogent` CLI, which the runtime invokes
//! once per lifecycle event.
//!
//! # Main Entry Points
//!
//! - [`hooks`] - Per-event hook handlers and the dispatcher
//! - [`events`] - Envelope construction and fire-and-forget publishing
//! - [`guard`] - Pre-tool-use deny rules
//! - [`bootstrap`] - Idempotent container startup steps
//! - [`session`] - Explicit session-context persistence

pub mod bootstrap;
pub mod events;
pub mod guard;
pub mod hooks;
pub mod logging;
pub mod session;

// Re-export config types so CLI code needs a single dependency surface
pub use cogent_config::{AuthConfig, AuthMethod, CogentConfig, ConfigError, NatsConfig};
pub use cogent_paths::{CogentPaths, PathError};

pub use events::{HookEnvelope, publish_hook_event};
pub use guard::{Decision, evaluate};
pub use hooks::{HookEvent, HookInput, HookOutput, dispatch};

// Re-export logging initialization
pub use logging::init_logging;
