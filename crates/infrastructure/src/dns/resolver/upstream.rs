use super::system_conf;
use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::{Transport, TransportResponse};
use async_trait::async_trait;
use ferrous_lookup_application::ports::RecordResolver;
use ferrous_lookup_domain::{
    ConfigError, DnsConfig, RawRecords, RecordType, ResolverError, ResolverErrorKind,
};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Forwards each lookup to a list of upstream recursive resolvers.
///
/// Servers are tried in order; the next one is only consulted when the current
/// one cannot be reached or sends back something unparseable. A response code
/// such as NXDOMAIN is an answer and ends the lookup.
pub struct UpstreamResolver {
    servers: Vec<SocketAddr>,
    query_timeout: Duration,
}

impl UpstreamResolver {
    pub fn new(servers: Vec<SocketAddr>, query_timeout: Duration) -> Self {
        info!(
            servers = servers.len(),
            timeout_ms = query_timeout.as_millis() as u64,
            "Upstream DNS resolver created"
        );

        Self {
            servers,
            query_timeout,
        }
    }

    /// Uses the configured upstreams, or the host's nameservers when none are set.
    pub fn from_config(config: &DnsConfig) -> Result<Self, ConfigError> {
        let servers = if config.uses_host_nameservers() {
            system_conf::host_nameservers()
        } else {
            config.upstream_addrs()?
        };
        Ok(Self::new(servers, config.query_timeout()))
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    /// Build message → send via UDP → parse; retries over TCP when the answer is truncated.
    async fn query_server(
        &self,
        server: SocketAddr,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResponse, ResolverError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_query_with_id(domain, &record_type)?;

        let udp_response = Transport::udp(server)
            .send(&query_bytes, self.query_timeout)
            .await?;
        let response = Self::parse(server, &udp_response, record_type)?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server, "Response truncated (TC bit), retrying via TCP");

        let remaining = remaining_budget(server, self.query_timeout, start.elapsed())?;

        let tcp_response = Transport::tcp(server).send(&query_bytes, remaining).await?;
        let response = Self::parse(server, &tcp_response, record_type)?;

        if response.id != id {
            return Err(ResolverError::other(format!(
                "DNS ID mismatch from {}: expected {}, got {}",
                server, id, response.id
            )));
        }

        Ok(response)
    }

    fn parse(
        server: SocketAddr,
        transport_response: &TransportResponse,
        record_type: RecordType,
    ) -> Result<DnsResponse, ResolverError> {
        let response = ResponseParser::parse(&transport_response.bytes, record_type)?;
        debug!(
            server = %server,
            protocol = transport_response.protocol_used,
            bytes = transport_response.bytes.len(),
            "Upstream answered"
        );
        Ok(response)
    }
}

/// Time left of one attempt; exhausting it before the TCP retry is a timeout.
fn remaining_budget(
    server: SocketAddr,
    query_timeout: Duration,
    elapsed: Duration,
) -> Result<Duration, ResolverError> {
    query_timeout
        .checked_sub(elapsed)
        .filter(|remaining| !remaining.is_zero())
        .ok_or_else(|| {
            ResolverError::timeout(format!(
                "DNS query to {} timed out before TCP retry",
                server
            ))
        })
}

#[async_trait]
impl RecordResolver for UpstreamResolver {
    #[instrument(skip(self, record_type), fields(record_type = %record_type))]
    async fn resolve(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<RawRecords, ResolverError> {
        let mut last_error = None;

        for (position, server) in self.servers.iter().enumerate() {
            match self.query_server(*server, domain, record_type).await {
                Ok(response) => {
                    debug!(
                        server = %server,
                        rcode = ?response.rcode,
                        answers = response.records.len(),
                        "Server responded"
                    );
                    return response.into_records(domain, record_type);
                }
                Err(e) => {
                    warn!(server = %server, error = %e, position = position, "Failing over");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ResolverError::new(
                ResolverErrorKind::Other,
                "No upstream DNS servers configured",
            )
        }))
    }
}
