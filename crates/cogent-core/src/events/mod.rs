//! Hook event envelopes and fire-and-forget publishing.
//!
//! Best-effort delivery: transport failures are logged, the envelope is
//! written to stderr as a fallback, and the caller never sees an error.
//! Hooks must not fail just because the bus is down.

mod envelope;
mod publisher;

pub mod errors;

pub use envelope::HookEnvelope;
pub use errors::PublishError;
pub use publisher::publish_hook_event;
