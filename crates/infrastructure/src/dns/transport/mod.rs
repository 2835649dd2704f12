pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_lookup_domain::{ResolverError, ResolverErrorKind};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ResolverError>;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::Udp(udp::UdpTransport::new(server_addr))
    }

    pub fn tcp(server_addr: SocketAddr) -> Self {
        Self::Tcp(tcp::TcpTransport::new(server_addr))
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ResolverError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

/// Socket errors become `ConnectionRefused` when the peer refused, `Other` otherwise.
pub(crate) fn io_error(context: String, error: io::Error) -> ResolverError {
    let kind = match error.kind() {
        io::ErrorKind::ConnectionRefused => ResolverErrorKind::ConnectionRefused,
        io::ErrorKind::TimedOut => ResolverErrorKind::Timeout,
        _ => ResolverErrorKind::Other,
    };
    ResolverError::new(kind, format!("{}: {}", context, error))
}
