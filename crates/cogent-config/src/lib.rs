//! # cogent-config
//!
//! Environment-driven configuration for the Cogent hook bridge.
//!
//! Single source of truth for `CogentConfig` and its sub-configurations.

mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{from_env, from_lookup};
pub use types::{AuthConfig, AuthMethod, CogentConfig, NatsConfig};
pub use validation::{VALID_URL_SCHEMES, validate_config};

impl CogentConfig {
    /// Load and validate configuration from the process environment.
    ///
    /// See [`loading::from_env`] for details.
    pub fn load() -> Result<Self, ConfigError> {
        loading::from_env()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Subject a hook event for `event_name` is published on.
    pub fn hook_subject(&self, event_name: &str) -> String {
        format!("agent.{}.events.hook.{}", self.agent_id, event_name)
    }
}
