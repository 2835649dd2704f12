use crate::RecordType;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream recursive resolvers, `ip` or `ip:port`, tried in order.
    /// Empty means the host's own nameservers.
    #[serde(default)]
    pub upstream_servers: Vec<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_slow_query_threshold_ms")]
    pub slow_query_threshold_ms: u64,

    /// Record types accepted by the web API.
    #[serde(default = "default_web_record_types")]
    pub web_record_types: Vec<RecordType>,
}

impl DnsConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn slow_query_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_query_threshold_ms)
    }

    pub fn uses_host_nameservers(&self) -> bool {
        self.upstream_servers.is_empty()
    }

    pub fn upstream_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.upstream_servers
            .iter()
            .map(|server| parse_upstream(server))
            .collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_servers: Vec::new(),
            query_timeout_ms: default_query_timeout_ms(),
            slow_query_threshold_ms: default_slow_query_threshold_ms(),
            web_record_types: default_web_record_types(),
        }
    }
}

fn parse_upstream(server: &str) -> Result<SocketAddr, ConfigError> {
    let server = server.trim();
    let server = server.strip_prefix("udp://").unwrap_or(server);

    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }

    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid upstream server: {}", server)))
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_slow_query_threshold_ms() -> u64 {
    200
}

fn default_web_record_types() -> Vec<RecordType> {
    RecordType::WEB_DEFAULT.to_vec()
}
