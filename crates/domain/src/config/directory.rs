use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default PlanetLab Central API endpoint.
pub const DEFAULT_DIRECTORY_URL: &str = "https://www.planet-lab.org/PLCAPI/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryKind {
    /// Remote XML-RPC node listing (PLCAPI `GetNodes` style)
    #[default]
    XmlRpc,
    /// Hostnames listed in `directory.nodes`
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    #[default]
    Anonymous,
    Password,
}

impl AuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Anonymous => "anonymous",
            AuthMethod::Password => "password",
        }
    }
}

/// Credentials sent as the first XML-RPC parameter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryAuth {
    #[serde(default)]
    pub method: AuthMethod,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl Default for DirectoryAuth {
    fn default() -> Self {
        Self {
            method: AuthMethod::default(),
            role: default_role(),
            username: None,
            password: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub kind: DirectoryKind,

    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_method")]
    pub method: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Struct member holding the hostname in each returned record
    #[serde(default = "default_hostname_field")]
    pub hostname_field: String,

    #[serde(default)]
    pub auth: DirectoryAuth,

    /// Exact-match filters passed as the second XML-RPC parameter
    #[serde(default)]
    pub filter: BTreeMap<String, String>,

    #[serde(default)]
    pub nodes: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            kind: DirectoryKind::default(),
            url: default_url(),
            method: default_method(),
            request_timeout: default_request_timeout(),
            hostname_field: default_hostname_field(),
            auth: DirectoryAuth::default(),
            filter: BTreeMap::new(),
            nodes: Vec::new(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_DIRECTORY_URL.to_string()
}

fn default_method() -> String {
    "GetNodes".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_hostname_field() -> String {
    "hostname".to_string()
}

fn default_role() -> String {
    "user".to_string()
}
