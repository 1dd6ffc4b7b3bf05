pub mod resolve_nodes;

pub use resolve_nodes::{ResolutionBatch, ResolveNodesUseCase};
