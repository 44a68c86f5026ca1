use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Host query failed: {0}")]
    HostQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EventError>;
