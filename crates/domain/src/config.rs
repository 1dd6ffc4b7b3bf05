pub mod directory;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use directory::{AuthMethod, DirectoryAuth, DirectoryConfig, DirectoryKind};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{AddressFamily, ResolverConfig};
pub use root::{CliOverrides, Config};
