pub mod build_report;

pub use build_report::{BuildReportUseCase, HostRow, NodeReport};
