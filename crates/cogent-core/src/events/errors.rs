#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to serialize envelope: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("failed to start transport runtime: {source}")]
    Runtime { source: std::io::Error },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("publish timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}
