//! Configuration types for the Cogent hook bridge.
//!
//! Every field maps to one environment variable consumed by the container
//! entrypoint or the hooks. Defaults match the container image layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration, assembled from environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CogentConfig {
    /// Unique identifier for this agent, used in subject names and
    /// envelope `agent_id` fields (`COGENT_AGENT_ID`).
    pub agent_id: String,

    /// Root directory for project workspaces (`COGENT_WORKSPACE_DIR`).
    pub workspace_dir: PathBuf,

    /// Directory holding skills, commands, and the default settings file
    /// (`COGENT_ASSETS_DIR`).
    pub assets_dir: PathBuf,

    /// File the session-start hook appends session context to, provided
    /// by the host runtime (`COGENT_SESSION_ENV_FILE`). Optional; when
    /// unset, session context is not persisted.
    pub session_env_file: Option<PathBuf>,

    pub nats: NatsConfig,
    pub auth: AuthConfig,
}

/// NATS transport configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatsConfig {
    /// NATS server URL (`NATS_URL`).
    pub url: String,

    /// Bound on the connect-and-publish attempt, in seconds
    /// (`NATS_CONNECT_TIMEOUT_SECS`).
    pub connect_timeout_secs: u64,
}

/// Credential context resolved from the environment.
///
/// Empty strings are normalized to `None` during loading, so a variable
/// set to `""` counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth token for a subscription login (`CLAUDE_CODE_OAUTH_TOKEN`).
    pub oauth_token: Option<String>,

    /// API key fallback (`ANTHROPIC_API_KEY`).
    pub api_key: Option<String>,
}

/// Which credential the agent runtime should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    Oauth,
    ApiKey,
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMethod::Oauth => write!(f, "oauth"),
            AuthMethod::ApiKey => write!(f, "api_key"),
        }
    }
}

impl AuthConfig {
    /// Whether any credential is configured.
    pub fn has_credentials(&self) -> bool {
        self.oauth_token.is_some() || self.api_key.is_some()
    }

    /// The preferred credential: OAuth wins over the API key.
    pub fn preferred_method(&self) -> Option<AuthMethod> {
        if self.oauth_token.is_some() {
            Some(AuthMethod::Oauth)
        } else if self.api_key.is_some() {
            Some(AuthMethod::ApiKey)
        } else {
            None
        }
    }
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            url: "nats://localhost:4222".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl Default for CogentConfig {
    fn default() -> Self {
        Self {
            agent_id: "cogent-agent-001".to_string(),
            workspace_dir: PathBuf::from("/workspace"),
            assets_dir: PathBuf::from("/assets"),
            session_env_file: None,
            nats: NatsConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}
