pub mod static_directory;
pub mod xmlrpc;

pub use static_directory::StaticNodeDirectory;
pub use xmlrpc::XmlRpcNodeDirectory;
