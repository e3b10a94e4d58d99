use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdaptError {
    #[error("snapshot is not well formed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot failed validation: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
