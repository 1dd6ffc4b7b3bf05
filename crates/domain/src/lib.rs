//! nodeip Domain Layer
pub mod config;
pub mod errors;
pub mod node;
pub mod resolution;
pub mod summary;

pub use config::{
    AddressFamily, AuthMethod, CliOverrides, Config, ConfigError, DirectoryAuth,
    DirectoryConfig, DirectoryKind, LoggingConfig, ResolverConfig,
};
pub use errors::DomainError;
pub use node::Node;
pub use resolution::{ResolutionFailure, ResolutionOutcome, ResolutionResult, UNKNOWN_ADDRESS};
pub use summary::ResolutionSummary;
