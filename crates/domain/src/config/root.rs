use serde::{Deserialize, Serialize};

use super::directory::{AuthMethod, DirectoryConfig, DirectoryKind};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{AddressFamily, ResolverConfig};

/// Main configuration structure for nodeip
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Where the node list comes from
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Hostname lookup settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nodeip.toml in current directory
    /// 3. /etc/nodeip/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.directory_url {
            self.directory.url = url;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if let Some(family) = overrides.address_family {
            self.resolver.address_family = family;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.kind == DirectoryKind::XmlRpc {
            if self.directory.url.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Directory URL cannot be empty".to_string(),
                ));
            }
            if self.directory.method.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Directory method cannot be empty".to_string(),
                ));
            }
            if self.directory.request_timeout == 0 {
                return Err(ConfigError::Validation(
                    "Directory request timeout cannot be 0".to_string(),
                ));
            }
        }

        if self.directory.auth.method == AuthMethod::Password
            && self
                .directory
                .auth
                .username
                .as_deref()
                .map_or(true, |u| u.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "Password authentication requires a username".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file that `load` would pick up
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("nodeip.toml").exists() {
            Some("nodeip.toml".to_string())
        } else if std::path::Path::new("/etc/nodeip/config.toml").exists() {
            Some("/etc/nodeip/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub directory_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub address_family: Option<AddressFamily>,
    pub log_level: Option<String>,
}
