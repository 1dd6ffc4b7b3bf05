use async_trait::async_trait;
use nodeip_application::ports::NodeDirectory;
use nodeip_domain::{DomainError, Node};
use tracing::debug;

/// Directory backed by a fixed hostname list from configuration.
pub struct StaticNodeDirectory {
    nodes: Vec<Node>,
}

impl StaticNodeDirectory {
    pub fn new<S: AsRef<str>>(hostnames: &[S]) -> Result<Self, DomainError> {
        let nodes = hostnames
            .iter()
            .map(|h| Node::new(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { nodes })
    }
}

#[async_trait]
impl NodeDirectory for StaticNodeDirectory {
    async fn fetch_nodes(&self) -> Result<Vec<Node>, DomainError> {
        debug!(nodes = self.nodes.len(), "Using static node list");
        Ok(self.nodes.clone())
    }
}
