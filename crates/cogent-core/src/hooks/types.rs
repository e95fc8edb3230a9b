use serde_json::Value;

/// The lifecycle events the dispatcher handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    SessionStart,
    PreToolUse,
    PostToolUse,
    Notification,
}

impl HookEvent {
    /// Parse an event name from a CLI argument (case-insensitive,
    /// kebab/snake/Pascal all accepted).
    pub fn from_arg(s: &str) -> Option<HookEvent> {
        match s.to_lowercase().as_str() {
            "sessionstart" | "session-start" | "session_start" => Some(HookEvent::SessionStart),
            "pretooluse" | "pre-tool-use" | "pre_tool_use" => Some(HookEvent::PreToolUse),
            "posttooluse" | "post-tool-use" | "post_tool_use" => Some(HookEvent::PostToolUse),
            "notification" => Some(HookEvent::Notification),
            _ => None,
        }
    }

    /// Canonical event name: the last subject segment on the bus.
    pub fn name(&self) -> &'static str {
        match self {
            HookEvent::SessionStart => "session-start",
            HookEvent::PreToolUse => "pre-tool-use",
            HookEvent::PostToolUse => "post-tool-use",
            HookEvent::Notification => "notification",
        }
    }
}

/// Raw JSON input read from hook stdin.
///
/// Kept as a `serde_json::Value`: the event is opaque and each handler
/// destructures only the fields it needs.
#[derive(Debug, Clone)]
pub struct HookInput {
    pub data: Value,
}

impl HookInput {
    /// Parse one stdin read. Malformed or empty input degrades to an
    /// empty object so hooks never crash over input shape.
    pub fn from_stdin_text(text: &str) -> Self {
        let data = serde_json::from_str(text).unwrap_or_else(|_| Value::Object(Default::default()));
        Self { data }
    }

    /// Convenience accessor for a top-level string field.
    pub fn str_field<'a>(&'a self, key: &str) -> Option<&'a str> {
        self.data.get(key).and_then(|v| v.as_str())
    }
}

/// Result of one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutput {
    /// Process exit code: 0 = allow/observe, 2 = block the pending tool.
    pub exit_code: i32,
}

impl HookOutput {
    pub fn ok() -> Self {
        Self { exit_code: 0 }
    }

    pub fn block() -> Self {
        Self { exit_code: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_arg_kebab_snake_pascal() {
        assert_eq!(HookEvent::from_arg("SessionStart"), Some(HookEvent::SessionStart));
        assert_eq!(HookEvent::from_arg("session-start"), Some(HookEvent::SessionStart));
        assert_eq!(HookEvent::from_arg("session_start"), Some(HookEvent::SessionStart));
        assert_eq!(HookEvent::from_arg("PreToolUse"), Some(HookEvent::PreToolUse));
        assert_eq!(HookEvent::from_arg("pre-tool-use"), Some(HookEvent::PreToolUse));
        assert_eq!(HookEvent::from_arg("post_tool_use"), Some(HookEvent::PostToolUse));
        assert_eq!(HookEvent::from_arg("Notification"), Some(HookEvent::Notification));
    }

    #[test]
    fn test_from_arg_rejects_unknown() {
        assert_eq!(HookEvent::from_arg("stop"), None);
        assert_eq!(HookEvent::from_arg(""), None);
    }

    #[test]
    fn test_event_names_are_kebab_case() {
        assert_eq!(HookEvent::SessionStart.name(), "session-start");
        assert_eq!(HookEvent::PreToolUse.name(), "pre-tool-use");
        assert_eq!(HookEvent::PostToolUse.name(), "post-tool-use");
        assert_eq!(HookEvent::Notification.name(), "notification");
    }

    #[test]
    fn test_from_arg_roundtrips_canonical_names() {
        for event in [
            HookEvent::SessionStart,
            HookEvent::PreToolUse,
            HookEvent::PostToolUse,
            HookEvent::Notification,
        ] {
            assert_eq!(HookEvent::from_arg(event.name()), Some(event));
        }
    }

    #[test]
    fn test_input_parses_valid_json() {
        let input = HookInput::from_stdin_text(r#"{"tool_name":"Bash"}"#);
        assert_eq!(input.str_field("tool_name"), Some("Bash"));
    }

    #[test]
    fn test_input_malformed_becomes_empty_object() {
        let input = HookInput::from_stdin_text("{not json");
        assert_eq!(input.data, json!({}));
    }

    #[test]
    fn test_input_empty_becomes_empty_object() {
        let input = HookInput::from_stdin_text("");
        assert_eq!(input.data, json!({}));
    }

    #[test]
    fn test_output_constructors() {
        assert_eq!(HookOutput::ok().exit_code, 0);
        assert_eq!(HookOutput::block().exit_code, 2);
    }
}
