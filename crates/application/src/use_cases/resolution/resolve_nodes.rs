use crate::ports::{HostResolver, NodeDirectory};
use nodeip_domain::{DomainError, Node, ResolutionOutcome, ResolutionResult, ResolutionSummary};
use std::sync::Arc;
use tracing::{debug, info};

/// Every lookup of one run, in directory order, plus its tally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionBatch {
    pub results: Vec<ResolutionResult>,
    pub summary: ResolutionSummary,
}

impl ResolutionBatch {
    pub fn from_results(results: Vec<ResolutionResult>) -> Self {
        let summary = ResolutionSummary::from_results(&results);
        Self { results, summary }
    }

    /// Resolved addresses only, preserving node order.
    pub fn addresses(&self) -> impl Iterator<Item = std::net::IpAddr> + '_ {
        self.results.iter().filter_map(ResolutionResult::address)
    }
}

pub struct ResolveNodesUseCase {
    directory: Arc<dyn NodeDirectory>,
    resolver: Arc<dyn HostResolver>,
}

impl ResolveNodesUseCase {
    pub fn new(directory: Arc<dyn NodeDirectory>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            directory,
            resolver,
        }
    }

    /// Fetches the node list and resolves all of it.
    ///
    /// Only the directory fetch can fail; lookup failures end up in the batch.
    pub async fn execute(&self) -> Result<ResolutionBatch, DomainError> {
        let nodes = self.directory.fetch_nodes().await?;
        info!(nodes = nodes.len(), "Fetched node list");

        Ok(self.resolve_all(nodes).await)
    }

    pub async fn resolve_all(&self, nodes: Vec<Node>) -> ResolutionBatch {
        let mut results = Vec::with_capacity(nodes.len());

        for node in nodes {
            let result = self.resolver.resolve(node).await;
            match &result.outcome {
                ResolutionOutcome::Resolved(addr) => {
                    debug!(hostname = %result.node, address = %addr, "Node resolved");
                }
                ResolutionOutcome::Failed(failure) => {
                    debug!(hostname = %result.node, error = %failure, "Node lookup failed");
                }
            }
            results.push(result);
        }

        let batch = ResolutionBatch::from_results(results);
        info!(
            total = batch.summary.total(),
            successful = batch.summary.successful,
            failed = batch.summary.failed,
            "Lookups finished"
        );
        batch
    }
}
