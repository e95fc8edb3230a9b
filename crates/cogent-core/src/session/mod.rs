//! Explicit session-context persistence.
//!
//! The host runtime hands the session-start hook a persistence file path;
//! the hook appends `KEY=VALUE` lines there so later invocations in the
//! same session can read them back from their environment. Modeled as an
//! explicit context object rather than ambient environment mutation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to append session context to {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Context captured once per session at the session-start hook.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Build a context from the session-start payload.
    ///
    /// A missing or non-string `session_id` degrades to `"unknown"`;
    /// the hook never fails over input shape.
    pub fn from_payload(payload: &Value) -> Self {
        let session_id = payload
            .get("session_id")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string();

        Self {
            session_id,
            started_at: Utc::now(),
        }
    }

    /// The `KEY=VALUE` lines appended to the persistence file.
    pub fn env_lines(&self) -> String {
        format!(
            "COGENT_SESSION_ID={}\nCOGENT_SESSION_STARTED_AT={}\n",
            self.session_id,
            self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    /// Append the context to the runtime-provided persistence file.
    ///
    /// Creates the file if missing, always appends. Earlier sessions'
    /// lines are left in place for the host to resolve last-wins.
    pub fn record(&self, path: &Path) -> Result<(), SessionError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SessionError::Io {
                path: path.display().to_string(),
                source,
            })?;

        file.write_all(self.env_lines().as_bytes())
            .map_err(|source| SessionError::Io {
                path: path.display().to_string(),
                source,
            })?;

        info!(
            event = "core.session.context_recorded",
            session_id = %self.session_id,
            path = %path.display(),
        );

        Ok(())
    }
}
