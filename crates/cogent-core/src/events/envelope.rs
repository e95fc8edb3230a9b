use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wrapper published around every hook event.
///
/// The payload is the stdin record unchanged; the envelope only adds the
/// type tag, the agent identity, and a timestamp. `correlation_id` lets
/// downstream consumers group all events of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookEnvelope {
    #[serde(rename = "type")]
    pub event_type: String,

    pub agent_id: String,

    /// ISO-8601 UTC timestamp, synthesized at construction time.
    pub timestamp: String,

    /// The original hook event, passed through unmodified.
    pub payload: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl HookEnvelope {
    /// Build an envelope around `payload` for the given event name.
    ///
    /// The correlation id is taken from the payload's `session_id` field
    /// when present.
    pub fn new(event_type: &str, agent_id: &str, payload: Value) -> Self {
        let correlation_id = payload
            .get("session_id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Self {
            event_type: event_type.to_string(),
            agent_id: agent_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            payload,
            correlation_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_passed_through_unmodified() {
        let payload = json!({
            "tool_name": "Bash",
            "tool_input": {"command": "ls -la"},
            "nested": {"deep": [1, 2, {"three": null}]}
        });
        let envelope = HookEnvelope::new("pre-tool-use", "agent-1", payload.clone());
        assert_eq!(envelope.payload, payload);
    }

    #[test]
    fn test_payload_key_order_preserved() {
        // Consumers diff published payloads against what the runtime
        // sent; object keys must come out in input order, not sorted.
        let payload: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        let envelope = HookEnvelope::new("notification", "agent-1", payload);
        let text = serde_json::to_string(&envelope).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha, "payload key order changed: {text}");
    }

    #[test]
    fn test_empty_payload_accepted() {
        let envelope = HookEnvelope::new("notification", "agent-1", json!({}));
        assert_eq!(envelope.payload, json!({}));
        assert!(envelope.correlation_id.is_none());
    }

    #[test]
    fn test_non_object_payload_accepted() {
        // The hook event is opaque, even a bare string wraps cleanly.
        let envelope = HookEnvelope::new("notification", "agent-1", json!("just text"));
        assert_eq!(envelope.payload, json!("just text"));
    }

    #[test]
    fn test_correlation_id_from_session_id() {
        let envelope = HookEnvelope::new(
            "session-start",
            "agent-1",
            json!({"session_id": "sess-abc123"}),
        );
        assert_eq!(envelope.correlation_id.as_deref(), Some("sess-abc123"));
    }

    #[test]
    fn test_correlation_id_ignores_non_string_session_id() {
        let envelope = HookEnvelope::new("session-start", "agent-1", json!({"session_id": 42}));
        assert!(envelope.correlation_id.is_none());
    }

    #[test]
    fn test_timestamp_is_rfc3339_utc() {
        let envelope = HookEnvelope::new("notification", "agent-1", json!({}));
        assert!(envelope.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&envelope.timestamp).is_ok());
    }

    #[test]
    fn test_serialized_shape() {
        let envelope = HookEnvelope::new("post-tool-use", "agent-9", json!({"ok": true}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["type"], "post-tool-use");
        assert_eq!(value["agent_id"], "agent-9");
        assert_eq!(value["payload"], json!({"ok": true}));
        // Absent correlation id is omitted, not null
        assert!(value.get("correlation_id").is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let envelope = HookEnvelope::new(
            "session-start",
            "agent-1",
            json!({"session_id": "s1", "cwd": "/workspace"}),
        );
        let text = serde_json::to_string(&envelope).unwrap();
        let back: HookEnvelope = serde_json::from_str(&text).unwrap();
        assert_eq!(back, envelope);
    }
}
