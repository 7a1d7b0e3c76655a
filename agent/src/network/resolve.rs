use common::system::NetworkInfo;
use log::error;
use std::net::ToSocketAddrs;
use sysinfo::System;

/// Sentinel reported when hostname or address resolution fails
const UNKNOWN: &str = "unknown";

/// Resolve the local hostname and its IP address through the OS resolver.
/// Failures substitute sentinels for both values and never fail the cycle
pub(crate) fn resolve_network() -> NetworkInfo {
    let unknown = NetworkInfo {
        hostname: String::from(UNKNOWN),
        ip_address: String::from(UNKNOWN),
    };

    let hostname = match System::host_name() {
        Some(result) => result,
        None => {
            error!("[agent] Failed to get local hostname");
            return unknown;
        }
    };

    match lookup_host(&hostname) {
        Some(ip_address) => NetworkInfo {
            hostname,
            ip_address,
        },
        None => {
            error!("[agent] Failed to resolve {hostname} to an address");
            unknown
        }
    }
}

/// Resolve a hostname to one address. IPv4 entries are preferred
fn lookup_host(hostname: &str) -> Option<String> {
    let addresses: Vec<_> = match (hostname, 0).to_socket_addrs() {
        Ok(result) => result.collect(),
        Err(_err) => return None,
    };

    let address = addresses
        .iter()
        .find(|entry| entry.is_ipv4())
        .or_else(|| addresses.first())?;

    Some(address.ip().to_string())
}
