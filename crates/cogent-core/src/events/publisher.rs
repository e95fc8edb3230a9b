use std::time::Duration;

use bytes::Bytes;
use cogent_config::CogentConfig;
use serde_json::Value;
use tracing::{debug, warn};

use super::envelope::HookEnvelope;
use super::errors::PublishError;

/// Publish a hook event to `agent.<agent-id>.events.hook.<event-name>`.
///
/// Fire-and-forget: exactly one delivery attempt, bounded by the
/// configured connect timeout. On any failure the envelope is written to
/// stderr as a human-readable fallback line and the failure is logged at
/// warn. This function never returns an error to its caller.
pub fn publish_hook_event(config: &CogentConfig, event_name: &str, payload: Value) {
    let envelope = HookEnvelope::new(event_name, &config.agent_id, payload);
    let subject = config.hook_subject(event_name);

    match try_publish(config, &subject, &envelope) {
        Ok(()) => {
            debug!(
                event = "core.events.publish_completed",
                subject = %subject,
                hook_event = event_name,
            );
        }
        Err(e) => {
            warn!(
                event = "core.events.publish_failed",
                subject = %subject,
                hook_event = event_name,
                error = %e,
            );
            write_fallback(event_name, &envelope);
        }
    }
}

/// One connect-and-publish attempt over NATS.
fn try_publish(
    config: &CogentConfig,
    subject: &str,
    envelope: &HookEnvelope,
) -> Result<(), PublishError> {
    let body = serde_json::to_vec(envelope)?;
    let timeout_secs = config.nats.connect_timeout_secs;
    let deadline = Duration::from_secs(timeout_secs);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| PublishError::Runtime { source })?;

    runtime.block_on(async {
        let attempt = async {
            let client = async_nats::connect(config.nats.url.as_str())
                .await
                .map_err(|e| PublishError::Transport {
                    message: e.to_string(),
                })?;

            client
                .publish(subject.to_string(), Bytes::from(body))
                .await
                .map_err(|e| PublishError::Transport {
                    message: e.to_string(),
                })?;

            // publish() only queues; flush forces the single delivery
            // attempt out before the process exits.
            client.flush().await.map_err(|e| PublishError::Transport {
                message: e.to_string(),
            })?;

            Ok(())
        };

        tokio::time::timeout(deadline, attempt)
            .await
            .unwrap_or(Err(PublishError::Timeout { timeout_secs }))
    })
}

/// Emit the envelope to stderr so the event is not silently lost when the
/// bus is unreachable.
fn write_fallback(event_name: &str, envelope: &HookEnvelope) {
    let rendered = serde_json::to_string(envelope)
        .unwrap_or_else(|_| format!("{{\"type\":\"{event_name}\"}}"));
    eprintln!("cogent event fallback: {event_name} {rendered}");
}
