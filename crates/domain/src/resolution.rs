use crate::node::Node;
use std::net::IpAddr;
use thiserror::Error;

/// Label printed in place of an address when a lookup failed.
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// Why a single hostname lookup did not produce an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    #[error("no usable address found")]
    NotFound,

    #[error("lookup timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("lookup failed: {0}")]
    Lookup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(IpAddr),
    Failed(ResolutionFailure),
}

/// One node paired with the outcome of its lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub node: Node,
    pub outcome: ResolutionOutcome,
}

impl ResolutionResult {
    pub fn resolved(node: Node, address: IpAddr) -> Self {
        Self {
            node,
            outcome: ResolutionOutcome::Resolved(address),
        }
    }

    pub fn failed(node: Node, failure: ResolutionFailure) -> Self {
        Self {
            node,
            outcome: ResolutionOutcome::Failed(failure),
        }
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self.outcome {
            ResolutionOutcome::Resolved(addr) => Some(addr),
            ResolutionOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ResolutionFailure> {
        match &self.outcome {
            ResolutionOutcome::Resolved(_) => None,
            ResolutionOutcome::Failed(failure) => Some(failure),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.outcome, ResolutionOutcome::Resolved(_))
    }

    /// The address as text, or [`UNKNOWN_ADDRESS`] for a failed lookup.
    pub fn address_label(&self) -> String {
        match self.outcome {
            ResolutionOutcome::Resolved(addr) => addr.to_string(),
            ResolutionOutcome::Failed(_) => UNKNOWN_ADDRESS.to_string(),
        }
    }
}
