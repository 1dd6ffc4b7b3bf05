pub mod report;
pub mod resolution;

// Re-export use cases
pub use report::{BuildReportUseCase, HostRow, NodeReport};
pub use resolution::{ResolutionBatch, ResolveNodesUseCase};
