//! # zonediff
//!
//! Compares what two nameservers serve for every record-set in a zone file
//! and prints the differences as a unified diff.

mod bootstrap;
mod output;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use zonediff_application::use_cases::ReconcileZoneUseCase;
use zonediff_domain::{CliOverrides, HostSpec};
use zonediff_infrastructure::dns::{NameserverClient, RetryPolicy};
use zonediff_infrastructure::system::{HostResolver, JitterPacer};
use zonediff_infrastructure::zone::ZoneFileLoader;

use bootstrap::{init_logging, load_config};
use output::TerminalDiffWriter;

#[derive(Parser)]
#[command(name = "zonediff")]
#[command(version)]
#[command(about = "Compare two nameservers' answers for every record in a zone file")]
struct Cli {
    /// Reference nameserver, host[:port]
    #[arg(short, long)]
    from: HostSpec,

    /// Nameserver compared against the reference, host[:port]
    #[arg(short, long)]
    to: HostSpec,

    /// Zone file listing the record-sets to compare
    #[arg(short, long)]
    zonefile: PathBuf,

    /// Zone origin, for files without $ORIGIN
    #[arg(short, long)]
    origin: Option<String>,

    /// Colour removed and added lines
    #[arg(short, long)]
    color: bool,

    /// Compare answers without their TTLs
    #[arg(long)]
    ignore_ttl: bool,

    /// Wait a random time up to SECONDS after each record
    #[arg(short, long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Initial query timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Longest query timeout in seconds; each timeout doubles up to this
    #[arg(long, value_name = "SECONDS")]
    max_timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        timeout_secs: cli.timeout,
        max_timeout_secs: cli.max_timeout,
        ignore_ttl: cli.ignore_ttl,
        color: cli.color,
        max_delay_secs: cli.delay,
        log_level: cli.log_level.clone(),
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    if config.output.color {
        colored::control::set_override(true);
    }

    let entries = ZoneFileLoader::load(&cli.zonefile, cli.origin.as_deref())?;

    let first = HostResolver::resolve(&cli.from).await?;
    let second = HostResolver::resolve(&cli.to).await?;

    let policy = RetryPolicy::new(config.query.timeout(), config.query.max_timeout());
    let first = NameserverClient::new(first, policy).with_ignore_ttl(config.query.ignore_ttl);
    let second = NameserverClient::new(second, policy).with_ignore_ttl(config.query.ignore_ttl);

    let mut use_case =
        ReconcileZoneUseCase::new(Arc::new(first), Arc::new(second), Arc::new(JitterPacer::new()))
            .with_max_delay(config.pacing.max_delay());

    let mut writer = TerminalDiffWriter::new(std::io::stdout(), config.output.color);

    let report = use_case.execute(entries, &mut writer).await?;

    info!(
        records = report.records_checked,
        differences = report.differences,
        "Done"
    );

    Ok(())
}
