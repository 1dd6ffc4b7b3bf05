use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A directory entry identified by its hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    hostname: Arc<str>,
}

impl Node {
    /// Builds a node from a directory-supplied hostname.
    ///
    /// Surrounding whitespace is trimmed; an empty result is rejected.
    pub fn new(hostname: &str) -> Result<Self, DomainError> {
        let trimmed = hostname.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidHostname(
                "hostname cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            hostname: Arc::from(trimmed),
        })
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hostname)
    }
}
