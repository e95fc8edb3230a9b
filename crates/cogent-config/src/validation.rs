//! Configuration validation.

use crate::errors::ConfigError;
use crate::types::CogentConfig;

/// URL schemes the NATS client accepts.
pub const VALID_URL_SCHEMES: &[&str] = &["nats://", "tls://"];

/// Validate a loaded configuration.
///
/// Checks the agent id (non-empty, subject-safe characters), the
/// transport URL scheme, and the connect timeout.
pub fn validate_config(config: &CogentConfig) -> Result<(), ConfigError> {
    validate_agent_id(&config.agent_id)?;
    validate_transport_url(&config.nats.url)?;

    if config.nats.connect_timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            variable: "NATS_CONNECT_TIMEOUT_SECS".to_string(),
            message: "timeout must be greater than zero".to_string(),
        });
    }

    Ok(())
}

/// The agent id becomes a NATS subject token (`agent.<id>.events.hook.*`),
/// so it must not contain subject separators or wildcards.
fn validate_agent_id(agent_id: &str) -> Result<(), ConfigError> {
    if agent_id.trim().is_empty() {
        return Err(ConfigError::InvalidAgentId {
            message: "agent id must not be empty".to_string(),
        });
    }

    if let Some(bad) = agent_id
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_'))
    {
        return Err(ConfigError::InvalidAgentId {
            message: format!("character '{bad}' is not allowed in a subject token"),
        });
    }

    Ok(())
}

fn validate_transport_url(url: &str) -> Result<(), ConfigError> {
    if VALID_URL_SCHEMES.iter().any(|s| url.starts_with(s)) {
        return Ok(());
    }

    Err(ConfigError::InvalidTransportUrl {
        url: url.to_string(),
        message: format!("expected one of the schemes: {}", VALID_URL_SCHEMES.join(", ")),
    })
}
