use clap::Parser;
use ferrous_lookup::{bootstrap, di, report::ConsoleReport};
use ferrous_lookup_domain::{CliOverrides, RecordType};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Query the A, AAAA, MX, NS, TXT and CNAME records of a domain")]
struct Cli {
    /// Domain to look up, e.g. google.com
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream DNS server, repeatable (e.g. 9.9.9.9 or 1.1.1.1:53)
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstream: Vec<String>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_console_logging(cli.log_level.as_deref());

    let cli_overrides = CliOverrides {
        upstream_servers: cli.upstream.clone(),
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
        ..CliOverrides::default()
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    let dns = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&config, &dns);

    let mut report = ConsoleReport::stdio(config.dns.slow_query_threshold());
    report.header(&cli.domain)?;

    let mut write_error = None;
    let envelope = use_cases
        .console_resolve
        .execute_sequential(&cli.domain, &RecordType::ALL, |result| {
            if let Err(e) = report.result(&cli.domain, result) {
                write_error.get_or_insert(e);
            }
        })
        .await?;

    if let Some(e) = write_error {
        return Err(e.into());
    }

    debug!(
        successes = envelope.successes(),
        failures = envelope.failures(),
        "Report finished"
    );

    Ok(())
}
