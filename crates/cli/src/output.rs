use clap::ValueEnum;
use nodeip_application::use_cases::{BuildReportUseCase, ResolutionBatch};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Four plain-text sections
    #[default]
    Text,
    /// One JSON document
    Json,
}

pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &BuildReportUseCase,
    batch: &ResolutionBatch,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(report.render_text(batch).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report.build(batch))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
