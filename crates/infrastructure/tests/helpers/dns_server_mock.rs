#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const RCODE_NXDOMAIN: u8 = 3;
const RCODE_SERVFAIL: u8 = 2;
const RCODE_REFUSED: u8 = 5;

#[derive(Debug, Clone)]
pub enum MockAnswer {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Mx(u16, &'static str),
    Ns(&'static str),
    Cname(&'static str),
    Txt(Vec<&'static str>),
}

impl MockAnswer {
    fn rtype(&self) -> u16 {
        match self {
            MockAnswer::A(_) => 1,
            MockAnswer::Ns(_) => 2,
            MockAnswer::Cname(_) => 5,
            MockAnswer::Mx(..) => 15,
            MockAnswer::Txt(_) => 16,
            MockAnswer::Aaaa(_) => 28,
        }
    }

    fn rdata(&self) -> Vec<u8> {
        match self {
            MockAnswer::A(ip) => ip.octets().to_vec(),
            MockAnswer::Aaaa(ip) => ip.octets().to_vec(),
            MockAnswer::Mx(preference, exchange) => {
                let mut rdata = preference.to_be_bytes().to_vec();
                rdata.extend(encode_name(exchange));
                rdata
            }
            MockAnswer::Ns(name) | MockAnswer::Cname(name) => encode_name(name),
            MockAnswer::Txt(chunks) => chunks
                .iter()
                .flat_map(|chunk| {
                    let mut encoded = vec![chunk.len() as u8];
                    encoded.extend_from_slice(chunk.as_bytes());
                    encoded
                })
                .collect(),
        }
    }
}

/// What the mock server sends back for every query it receives.
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    rcode: u8,
    answers: Vec<MockAnswer>,
    truncate_udp: bool,
    silent: bool,
}

impl MockResponse {
    pub fn answers(answers: Vec<MockAnswer>) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nxdomain() -> Self {
        Self::rcode(RCODE_NXDOMAIN)
    }

    pub fn servfail() -> Self {
        Self::rcode(RCODE_SERVFAIL)
    }

    pub fn refused() -> Self {
        Self::rcode(RCODE_REFUSED)
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Self::default()
        }
    }

    /// Never answers; queries run into the client timeout.
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }

    /// UDP replies carry only the TC bit; the answers are served over TCP.
    pub fn truncated_over_udp(mut self) -> Self {
        self.truncate_udp = true;
        self
    }
}

pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds UDP and TCP on the same loopback port chosen by the OS.
    pub async fn start(response: MockResponse) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_counter = Arc::clone(&udp_queries);
        let tcp_counter = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if response.silent {
                                continue;
                            }
                            let reply = build_response(&buf[..len], &response, response.truncate_udp);
                            let _ = socket.send_to(&reply, peer).await;
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            let response = response.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let reply = build_response(&query, &response, false);
                                let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&reply).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut encoded = Vec::new();
    for label in name.trim_end_matches('.').split('.') {
        encoded.push(label.len() as u8);
        encoded.extend_from_slice(label.as_bytes());
    }
    encoded.push(0);
    encoded
}

fn build_response(query: &[u8], response: &MockResponse, truncated: bool) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let answers: &[MockAnswer] = if truncated { &[] } else { &response.answers };
    let mut reply = Vec::with_capacity(512);

    reply.extend_from_slice(&query[0..2]);

    // QR + RD, TC when truncated; RA + rcode.
    reply.push(if truncated { 0x83 } else { 0x81 });
    reply.push(0x80 | (response.rcode & 0x0f));

    reply.extend_from_slice(&query[4..6]);
    reply.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    reply.extend_from_slice(&[0x00, 0x00]);
    reply.extend_from_slice(&[0x00, 0x00]);

    reply.extend_from_slice(&query[12..]);

    for answer in answers {
        let rdata = answer.rdata();
        reply.extend_from_slice(&[0xc0, 0x0c]);
        reply.extend_from_slice(&answer.rtype().to_be_bytes());
        reply.extend_from_slice(&[0x00, 0x01]);
        reply.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        reply.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        reply.extend_from_slice(&rdata);
    }

    reply
}
