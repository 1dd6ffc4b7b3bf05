use nodeip_application::ports::{HostResolver, NodeDirectory, TableRenderer};
use nodeip_domain::{Config, DirectoryKind};
use nodeip_infrastructure::directory::{StaticNodeDirectory, XmlRpcNodeDirectory};
use nodeip_infrastructure::output::AsciiTableRenderer;
use nodeip_infrastructure::system::SystemHostResolver;
use std::sync::Arc;
use tracing::info;

pub struct Adapters {
    pub directory: Arc<dyn NodeDirectory>,
    pub resolver: Arc<dyn HostResolver>,
    pub renderer: Arc<dyn TableRenderer>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let directory: Arc<dyn NodeDirectory> = match config.directory.kind {
            DirectoryKind::XmlRpc => {
                info!(url = %config.directory.url, method = %config.directory.method, "Using XML-RPC node directory");
                Arc::new(XmlRpcNodeDirectory::new(&config.directory)?)
            }
            DirectoryKind::Static => {
                info!(nodes = config.directory.nodes.len(), "Using static node directory");
                Arc::new(StaticNodeDirectory::new(&config.directory.nodes)?)
            }
        };

        Ok(Self {
            directory,
            resolver: Arc::new(SystemHostResolver::from_config(&config.resolver)),
            renderer: Arc::new(AsciiTableRenderer::new()),
        })
    }
}
