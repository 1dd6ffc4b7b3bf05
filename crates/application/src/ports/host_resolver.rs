use async_trait::async_trait;
use nodeip_domain::{Node, ResolutionResult};

#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Single lookup attempt. Failures are recorded in the result, never returned as errors.
    async fn resolve(&self, node: Node) -> ResolutionResult;
}
