//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC
//! (truncated) bit set, the caller should retry via TCP.

use super::{io_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_lookup_domain::ResolverError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    /// Reads datagrams until one carries the query's ID.
    async fn recv_matching(
        &self,
        socket: &UdpSocket,
        query_id: [u8; 2],
    ) -> Result<Vec<u8>, ResolverError> {
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let received = socket.recv(&mut recv_buf).await.map_err(|e| {
                io_error(
                    format!("Failed to receive UDP response from {}", self.server_addr),
                    e,
                )
            })?;

            if received >= 2 && recv_buf[..2] == query_id {
                recv_buf.truncate(received);
                return Ok(recv_buf);
            }

            warn!(
                server = %self.server_addr,
                bytes_received = received,
                "Discarding UDP datagram with mismatched DNS ID"
            );
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ResolverError> {
        if message_bytes.len() < 2 {
            return Err(ResolverError::other("DNS message too short to send"));
        }

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| io_error("Failed to bind UDP socket".to_string(), e))?;

        // Connected socket: ICMP port-unreachable surfaces as ConnectionRefused.
        socket.connect(self.server_addr).await.map_err(|e| {
            io_error(format!("Failed to connect UDP socket to {}", self.server_addr), e)
        })?;

        let exchange = async {
            let bytes_sent = socket.send(message_bytes).await.map_err(|e| {
                io_error(format!("Failed to send UDP query to {}", self.server_addr), e)
            })?;

            debug!(server = %self.server_addr, bytes_sent = bytes_sent, "UDP query sent");

            self.recv_matching(&socket, [message_bytes[0], message_bytes[1]])
                .await
        };

        let response = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| {
                ResolverError::timeout(format!(
                    "Timeout waiting for UDP response from {}",
                    self.server_addr
                ))
            })??;

        debug!(
            server = %self.server_addr,
            bytes_received = response.len(),
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: response,
            protocol_used: "UDP",
        })
    }
}
