//! Configuration loading from environment variables.
//!
//! The hook bridge is configured purely through the environment. Hooks
//! run as short-lived processes spawned by the host runtime, so there is
//! no config file hierarchy to merge. `from_env()` reads the process
//! environment; `from_lookup()` takes an explicit lookup function so
//! tests can supply variables without touching the real environment.

use std::path::PathBuf;

use crate::errors::ConfigError;
use crate::types::{AuthConfig, CogentConfig, NatsConfig};
use crate::validation::validate_config;

/// Load and validate configuration from the process environment.
///
/// Missing variables fall back to defaults; set-but-empty variables are
/// treated as unset. The only errors are validation failures.
pub fn from_env() -> Result<CogentConfig, ConfigError> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Load and validate configuration from an explicit variable lookup.
pub fn from_lookup<F>(lookup: F) -> Result<CogentConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = CogentConfig::default();
    let nats_defaults = NatsConfig::default();

    let connect_timeout_secs = match nonempty(&lookup, "NATS_CONNECT_TIMEOUT_SECS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue {
                variable: "NATS_CONNECT_TIMEOUT_SECS".to_string(),
                message: format!("'{raw}' is not a valid number of seconds: {e}"),
            })?,
        None => nats_defaults.connect_timeout_secs,
    };

    let config = CogentConfig {
        agent_id: nonempty(&lookup, "COGENT_AGENT_ID").unwrap_or(defaults.agent_id),
        workspace_dir: nonempty(&lookup, "COGENT_WORKSPACE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.workspace_dir),
        assets_dir: nonempty(&lookup, "COGENT_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir),
        session_env_file: nonempty(&lookup, "COGENT_SESSION_ENV_FILE").map(PathBuf::from),
        nats: NatsConfig {
            url: nonempty(&lookup, "NATS_URL").unwrap_or(nats_defaults.url),
            connect_timeout_secs,
        },
        auth: AuthConfig {
            oauth_token: nonempty(&lookup, "CLAUDE_CODE_OAUTH_TOKEN"),
            api_key: nonempty(&lookup, "ANTHROPIC_API_KEY"),
        },
    };

    validate_config(&config)?;

    Ok(config)
}

/// Look up a variable, treating empty or whitespace-only values as unset.
fn nonempty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|v| !v.trim().is_empty())
}
