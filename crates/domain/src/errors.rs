use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Node directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
