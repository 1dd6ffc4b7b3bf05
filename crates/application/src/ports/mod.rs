mod host_resolver;
mod node_directory;
mod table_renderer;

pub use host_resolver::HostResolver;
pub use node_directory::NodeDirectory;
pub use table_renderer::TableRenderer;
