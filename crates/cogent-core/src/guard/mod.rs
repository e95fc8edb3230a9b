//! Pre-tool-use guard: a fixed, ordered deny-list over tool calls.
//!
//! [`evaluate`] is a pure, stateless function of (tool name, tool
//! arguments): no filesystem access, no learning, no context beyond the
//! single call. Unknown tools and missing fields are allowed; the guard
//! only denies what a rule explicitly matches.
//!
//! This is a best-effort advisory layer. Regex matching over command
//! strings is evadable by construction, so the rule set must never be
//! treated as a security boundary.

pub mod rules;

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::info;

pub use rules::{COMMAND_RULES, PATH_RULES, Rule};

/// Tools whose arguments carry a shell command.
const SHELL_TOOLS: &[&str] = &["Bash"];

/// Tools whose arguments carry a write/edit target path.
const WRITE_TOOLS: &[&str] = &["Write", "Edit", "MultiEdit", "NotebookEdit"];

/// Argument fields checked, in order, for the target path.
const PATH_FIELDS: &[&str] = &["file_path", "path", "notebook_path"];

/// Outcome of evaluating one tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny {
        rule: &'static str,
        reason: &'static str,
    },
}

impl Decision {
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }
}

static COMMAND_MATCHERS: LazyLock<Vec<(Regex, &'static Rule)>> =
    LazyLock::new(|| compile(COMMAND_RULES));

static PATH_MATCHERS: LazyLock<Vec<(Regex, &'static Rule)>> =
    LazyLock::new(|| compile(PATH_RULES));

fn compile(table: &'static [Rule]) -> Vec<(Regex, &'static Rule)> {
    table
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.pattern)
                .unwrap_or_else(|e| panic!("rule '{}' has an invalid pattern: {e}", rule.name));
            (regex, rule)
        })
        .collect()
}

/// Decide whether a pending tool call may proceed.
///
/// Shell tools are matched against [`COMMAND_RULES`], write/edit tools
/// against [`PATH_RULES`]; the first matching rule wins. Everything else
/// is allowed, including calls with missing or malformed arguments.
pub fn evaluate(tool_name: &str, tool_input: &Value) -> Decision {
    let decision = if SHELL_TOOLS.contains(&tool_name) {
        let command = tool_input
            .get("command")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        first_match(&COMMAND_MATCHERS, command)
    } else if WRITE_TOOLS.contains(&tool_name) {
        match target_path(tool_input) {
            Some(path) => first_match(&PATH_MATCHERS, path),
            None => Decision::Allow,
        }
    } else {
        Decision::Allow
    };

    if let Decision::Deny { rule, reason } = &decision {
        info!(
            event = "core.guard.denied",
            tool = tool_name,
            rule = rule,
            reason = reason,
        );
    }

    decision
}

fn first_match(matchers: &[(Regex, &'static Rule)], haystack: &str) -> Decision {
    for (regex, rule) in matchers {
        if regex.is_match(haystack) {
            return Decision::Deny {
                rule: rule.name,
                reason: rule.reason,
            };
        }
    }
    Decision::Allow
}

/// Extract the write target from tool arguments, first field wins.
fn target_path(tool_input: &Value) -> Option<&str> {
    PATH_FIELDS
        .iter()
        .find_map(|key| tool_input.get(key).and_then(|v| v.as_str()))
        .filter(|s| !s.is_empty())
}
