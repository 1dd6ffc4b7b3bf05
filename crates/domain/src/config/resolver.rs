use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ConfigError;

/// Which address family a lookup should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    /// First IPv4 address, the classic `gethostbyname` behaviour.
    #[default]
    Ipv4,
    Ipv6,
    /// First address of any family, in resolver order.
    Any,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "ipv4",
            AddressFamily::Ipv6 => "ipv6",
            AddressFamily::Any => "any",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ipv4" | "v4" | "inet" => Ok(AddressFamily::Ipv4),
            "ipv6" | "v6" | "inet6" => Ok(AddressFamily::Ipv6),
            "any" => Ok(AddressFamily::Any),
            other => Err(ConfigError::Validation(format!(
                "Unknown address family '{}' (expected ipv4, ipv6 or any)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upper bound for a single hostname lookup, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub address_family: AddressFamily,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            address_family: AddressFamily::default(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}
