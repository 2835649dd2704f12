use ferrous_lookup_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Level used by the console report when neither `--log-level` nor `RUST_LOG` is given.
pub const CONSOLE_LOG_LEVEL: &str = "error";

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

pub fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(env_filter(&config.logging.level))
        .with_ansi(true)
        .init();

    info!("Logging initialized at level: {}", config.logging.level);
}

/// Logs go to stderr so they never interleave with the report on stdout.
pub fn init_console_logging(level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(env_filter(level.unwrap_or(CONSOLE_LOG_LEVEL)))
        .with_writer(std::io::stderr)
        .init();
}
