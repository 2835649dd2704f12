//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Each message is prefixed with its length as a big-endian u16. Used as the
//! fallback when a UDP answer comes back truncated.

use super::{io_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_lookup_domain::ResolverError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, ResolverError> {
        let mut stream = TcpStream::connect(self.server_addr).await.map_err(|e| {
            io_error(format!("Failed to connect to TCP server {}", self.server_addr), e)
        })?;

        stream.set_nodelay(true).map_err(|e| {
            io_error(format!("Failed to set TCP_NODELAY on {}", self.server_addr), e)
        })?;

        send_with_length_prefix(&mut stream, message_bytes).await?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        read_with_length_prefix(&mut stream).await
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ResolverError> {
        let response_bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| {
                ResolverError::timeout(format!(
                    "Timeout waiting for TCP response from {}",
                    self.server_addr
                ))
            })??;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), ResolverError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        ResolverError::other(format!(
            "DNS message too large for TCP: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| io_error("Failed to write length prefix".to_string(), e))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| io_error("Failed to write DNS message".to_string(), e))?;
    stream
        .flush()
        .await
        .map_err(|e| io_error("Failed to flush stream".to_string(), e))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, ResolverError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| io_error("Failed to read response length".to_string(), e))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    if response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(ResolverError::other(format!(
            "Response too large: {} bytes (max {})",
            response_len, MAX_TCP_MESSAGE_SIZE
        )));
    }

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| io_error("Failed to read response body".to_string(), e))?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_lookup_domain::ResolverErrorKind;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_length_prefix_roundtrip_over_duplex() {
        let (mut client, mut server) = tokio::io::duplex(1024);

        send_with_length_prefix(&mut client, &[1, 2, 3, 4, 5])
            .await
            .unwrap();
        let received = read_with_length_prefix(&mut server).await.unwrap();

        assert_eq!(received, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_truncated_body_is_an_error() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        client.write_all(&[0x00, 0x10, 0xAA]).await.unwrap();
        drop(client);

        assert!(read_with_length_prefix(&mut server).await.is_err());
    }

    #[tokio::test]
    async fn test_echo_server_exchange() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let query = read_with_length_prefix(&mut stream).await.unwrap();
            send_with_length_prefix(&mut stream, &query).await.unwrap();
        });

        let response = TcpTransport::new(addr)
            .send(&[0xAB, 0xCD, 0x01, 0x00], Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(response.bytes, vec![0xAB, 0xCD, 0x01, 0x00]);
        assert_eq!(response.protocol_used, "TCP");
    }

    #[tokio::test]
    async fn test_closed_port_is_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = TcpTransport::new(addr)
            .send(&[0x00, 0x01], Duration::from_secs(2))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ResolverErrorKind::ConnectionRefused);
    }
}
