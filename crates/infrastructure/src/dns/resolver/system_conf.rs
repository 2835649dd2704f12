//! Nameservers of the host, read from `/etc/resolv.conf`.

use resolv_conf::ScopedIp;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};
use tracing::{debug, warn};

const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";
const DNS_PORT: u16 = 53;

/// Used only when the host configuration cannot be read or lists no nameserver.
pub const PUBLIC_FALLBACK: [SocketAddr; 2] = [
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(1, 1, 1, 1), DNS_PORT)),
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(8, 8, 8, 8), DNS_PORT)),
];

pub fn host_nameservers() -> Vec<SocketAddr> {
    match std::fs::read(RESOLV_CONF_PATH) {
        Ok(contents) => nameservers_or_fallback(&contents),
        Err(e) => {
            warn!(
                path = RESOLV_CONF_PATH,
                error = %e,
                "Cannot read host resolver config, using public resolvers"
            );
            PUBLIC_FALLBACK.to_vec()
        }
    }
}

pub fn nameservers_or_fallback(contents: &[u8]) -> Vec<SocketAddr> {
    match parse_nameservers(contents) {
        Some(servers) => {
            debug!(servers = ?servers, "Using host nameservers");
            servers
        }
        None => {
            warn!("Host resolver config lists no usable nameserver, using public resolvers");
            PUBLIC_FALLBACK.to_vec()
        }
    }
}

fn parse_nameservers(contents: &[u8]) -> Option<Vec<SocketAddr>> {
    let config = resolv_conf::Config::parse(contents).ok()?;

    let servers: Vec<SocketAddr> = config
        .nameservers
        .iter()
        .map(|nameserver| {
            let ip = match nameserver {
                ScopedIp::V4(ip) => IpAddr::V4(*ip),
                ScopedIp::V6(ip, _) => IpAddr::V6(*ip),
            };
            SocketAddr::new(ip, DNS_PORT)
        })
        .collect();

    (!servers.is_empty()).then_some(servers)
}
