//! Error types for the adapter layer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Unknown mission status '{0}'")]
    InvalidStatus(String),

    #[error("Unknown priority '{0}'")]
    InvalidPriority(String),

    #[error(transparent)]
    InvalidProgress(#[from] bridge_domain::MissionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
