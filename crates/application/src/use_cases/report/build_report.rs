use crate::ports::TableRenderer;
use crate::use_cases::resolution::ResolutionBatch;
use nodeip_domain::ResolutionSummary;
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;

pub const LINE_SECTION_HEADER: &str = "Line separated IPs";
pub const COMMA_SECTION_HEADER: &str = "Comma separated IPs";
pub const TABLE_SECTION_HEADER: &str = "Hostnames and IPs in a pretty table";
pub const SUMMARY_SECTION_HEADER: &str = "Lookup summary information";

const HOST_TABLE_HEADERS: [&str; 2] = ["hostname", "ip"];
const SUMMARY_TABLE_HEADERS: [&str; 2] = ["status", "count"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRow {
    pub hostname: String,
    pub ip: String,
}

/// Serializable view of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeReport {
    pub addresses: Vec<String>,
    pub nodes: Vec<HostRow>,
    pub summary: ResolutionSummary,
}

pub struct BuildReportUseCase {
    renderer: Arc<dyn TableRenderer>,
}

impl BuildReportUseCase {
    pub fn new(renderer: Arc<dyn TableRenderer>) -> Self {
        Self { renderer }
    }

    pub fn build(&self, batch: &ResolutionBatch) -> NodeReport {
        NodeReport {
            addresses: batch.addresses().map(|addr| addr.to_string()).collect(),
            nodes: batch
                .results
                .iter()
                .map(|r| HostRow {
                    hostname: r.node.hostname().to_string(),
                    ip: r.address_label(),
                })
                .collect(),
            summary: batch.summary,
        }
    }

    /// Renders the four text sections, in fixed order, ending with a newline.
    pub fn render_text(&self, batch: &ResolutionBatch) -> String {
        let report = self.build(batch);
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}\n", LINE_SECTION_HEADER);
        for addr in &report.addresses {
            let _ = writeln!(out, "{}", addr);
        }

        let _ = writeln!(out, "\n\n{}\n", COMMA_SECTION_HEADER);
        let _ = writeln!(out, "{}", report.addresses.join(","));

        let _ = writeln!(out, "\n\n{}\n", TABLE_SECTION_HEADER);
        let _ = writeln!(out, "{}", self.render_host_table(&report.nodes));

        let _ = writeln!(out, "\n\n{}\n", SUMMARY_SECTION_HEADER);
        let _ = writeln!(out, "{}", self.render_summary_table(&report.summary));

        out
    }

    fn render_host_table(&self, rows: &[HostRow]) -> String {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| vec![row.hostname.clone(), row.ip.clone()])
            .collect();
        self.renderer.render(&HOST_TABLE_HEADERS, &rows)
    }

    fn render_summary_table(&self, summary: &ResolutionSummary) -> String {
        let rows = vec![
            vec!["Successful".to_string(), summary.successful.to_string()],
            vec!["Failed".to_string(), summary.failed.to_string()],
        ];
        self.renderer.render(&SUMMARY_TABLE_HEADERS, &rows)
    }
}
