use async_trait::async_trait;
use nodeip_domain::{DomainError, Node};

/// Source of the candidate node list.
#[async_trait]
pub trait NodeDirectory: Send + Sync {
    /// Lists every node, in the order the directory returned them.
    ///
    /// Any failure is [`DomainError::DirectoryUnavailable`]; there is no
    /// partial listing.
    async fn fetch_nodes(&self) -> Result<Vec<Node>, DomainError>;
}
