//! Network address resolution across the six supported families.
//!
//! # Design Decisions
//! - Closed dispatch over family tags, case-sensitive exact match, with an
//!   explicit error for anything outside the set
//! - First failure aborts the caller's whole list; no best-effort partials
//! - Unix-domain families carry a filesystem path; no existence check here

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use crate::config::error::ConfigError;

/// A resolved listen or dial target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAddr {
    Tcp(SocketAddr),
    Udp(SocketAddr),
    Ip(IpAddr),
    Unix(PathBuf),
}

/// Candidate filter derived from the `4`/`6` suffix of the family tag.
#[derive(Clone, Copy, PartialEq, Eq)]
enum IpScope {
    Any,
    V4Only,
    V6Only,
}

impl IpScope {
    fn admits(self, ip: IpAddr) -> bool {
        match self {
            IpScope::Any => true,
            IpScope::V4Only => ip.is_ipv4(),
            IpScope::V6Only => ip.is_ipv6(),
        }
    }
}

/// Resolve a (family, address) pair into a concrete network address.
pub fn resolve(family: &str, address: &str) -> Result<ResolvedAddr, ConfigError> {
    match family {
        "tcp" => socket_addr(family, address, IpScope::Any).map(ResolvedAddr::Tcp),
        "tcp4" => socket_addr(family, address, IpScope::V4Only).map(ResolvedAddr::Tcp),
        "tcp6" => socket_addr(family, address, IpScope::V6Only).map(ResolvedAddr::Tcp),
        "udp" => socket_addr(family, address, IpScope::Any).map(ResolvedAddr::Udp),
        "udp4" => socket_addr(family, address, IpScope::V4Only).map(ResolvedAddr::Udp),
        "udp6" => socket_addr(family, address, IpScope::V6Only).map(ResolvedAddr::Udp),
        "ip" => ip_addr(family, address, IpScope::Any).map(ResolvedAddr::Ip),
        "ip4" => ip_addr(family, address, IpScope::V4Only).map(ResolvedAddr::Ip),
        "ip6" => ip_addr(family, address, IpScope::V6Only).map(ResolvedAddr::Ip),
        "unix" | "unixgram" | "unixpacket" => unix_addr(family, address),
        other => Err(ConfigError::UnknownNetworkFamily(other.to_string())),
    }
}

fn resolution_error(family: &str, address: &str, reason: impl ToString) -> ConfigError {
    ConfigError::AddressResolution {
        family: family.to_string(),
        address: address.to_string(),
        reason: reason.to_string(),
    }
}

fn socket_addr(family: &str, address: &str, scope: IpScope) -> Result<SocketAddr, ConfigError> {
    let mut candidates = address
        .to_socket_addrs()
        .map_err(|e| resolution_error(family, address, e))?;
    candidates
        .find(|sa| scope.admits(sa.ip()))
        .ok_or_else(|| resolution_error(family, address, "no address in the requested family"))
}

fn ip_addr(family: &str, address: &str, scope: IpScope) -> Result<IpAddr, ConfigError> {
    if let Ok(ip) = address.parse::<IpAddr>() {
        if scope.admits(ip) {
            return Ok(ip);
        }
        return Err(resolution_error(family, address, "address is in the wrong family"));
    }
    // Hostname lookup; port 0 is a placeholder for the socket API.
    let candidates = (address, 0u16)
        .to_socket_addrs()
        .map_err(|e| resolution_error(family, address, e))?;
    candidates
        .map(|sa| sa.ip())
        .find(|ip| scope.admits(*ip))
        .ok_or_else(|| resolution_error(family, address, "no address in the requested family"))
}

fn unix_addr(family: &str, address: &str) -> Result<ResolvedAddr, ConfigError> {
    if address.is_empty() {
        return Err(resolution_error(family, address, "empty socket path"));
    }
    Ok(ResolvedAddr::Unix(PathBuf::from(address)))
}
