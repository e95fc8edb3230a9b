#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid agent id: {message}")]
    InvalidAgentId { message: String },

    #[error("Invalid transport URL '{url}': {message}")]
    InvalidTransportUrl { url: String, message: String },

    #[error("Invalid value for {variable}: {message}")]
    InvalidValue { variable: String, message: String },
}
