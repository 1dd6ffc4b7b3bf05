use anyhow::Context;
use clap::Parser;
use nodeip_domain::{AddressFamily, CliOverrides};
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod di;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "nodeip")]
#[command(version)]
#[command(about = "Resolve directory node hostnames to IP addresses and summarize the lookups")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Node directory XML-RPC endpoint
    #[arg(short = 'u', long, value_name = "URL")]
    url: Option<String>,

    /// Per-lookup DNS timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Address family to report (ipv4, ipv6, any)
    #[arg(short = 'a', long)]
    address_family: Option<AddressFamily>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            directory_url: self.url.clone(),
            timeout_ms: self.timeout_ms,
            address_family: self.address_family,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            let e = anyhow::Error::from(e).context("Failed to start async runtime");
            return report_failure(&mut std::io::stderr().lock(), &e);
        }
    };

    let outcome = runtime.block_on(run(cli));

    // A lookup abandoned on timeout still owns a blocking resolver thread.
    runtime.shutdown_background();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&mut std::io::stderr().lock(), &e),
    }
}

/// Writes the fatal error once; logging may not be initialised yet.
fn report_failure<W: Write>(out: &mut W, error: &anyhow::Error) -> ExitCode {
    let _ = writeln!(out, "Error: {:#}", error);
    ExitCode::FAILURE
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting nodeip v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(adapters);

    let batch = use_cases
        .resolve_nodes
        .execute()
        .await
        .context("Failed to fetch node list")?;

    let stdout = std::io::stdout();
    output::write_report(
        &mut stdout.lock(),
        cli.format,
        &use_cases.build_report,
        &batch,
    )
    .context("Failed to write report")?;

    info!(
        successful = batch.summary.successful,
        failed = batch.summary.failed,
        "Report written"
    );
    Ok(())
}
