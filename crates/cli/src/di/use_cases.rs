use super::Adapters;
use nodeip_application::use_cases::{BuildReportUseCase, ResolveNodesUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_nodes: Arc<ResolveNodesUseCase>,
    pub build_report: Arc<BuildReportUseCase>,
}

impl UseCases {
    pub fn new(adapters: Adapters) -> Self {
        Self {
            resolve_nodes: Arc::new(ResolveNodesUseCase::new(
                adapters.directory,
                adapters.resolver,
            )),
            build_report: Arc::new(BuildReportUseCase::new(adapters.renderer)),
        }
    }
}
