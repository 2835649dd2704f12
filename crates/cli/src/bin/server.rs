use clap::Parser;
use ferrous_lookup::{bootstrap, di, server};
use ferrous_lookup_api::AppState;
use ferrous_lookup_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-lookup-server")]
#[command(version)]
#[command(about = "Ferrous Lookup - DNS record lookup web service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream DNS server, repeatable (e.g. 9.9.9.9 or 1.1.1.1:53)
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstream: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        upstream_servers: cli.upstream.clone(),
        query_timeout_ms: None,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Lookup v{}", env!("CARGO_PKG_VERSION"));

    let dns = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&config, &dns);

    let app_state = AppState::new(use_cases.web_resolve);
    let web_addr = config.server.socket_addr()?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
