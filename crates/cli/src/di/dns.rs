use ferrous_lookup_application::ports::RecordResolver;
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::dns::UpstreamResolver;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<dyn RecordResolver>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let resolver = UpstreamResolver::from_config(&config.dns)?;

        info!(
            servers = ?resolver.servers(),
            timeout_ms = config.dns.query_timeout_ms,
            "DNS services initialized"
        );

        Ok(Self {
            resolver: Arc::new(resolver),
        })
    }
}
