//! Minimal reader for the `nameserver` lines of resolv.conf(5).

use std::net::IpAddr;
use tracing::debug;

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// Every `nameserver` address, in file order.
///
/// Comment lines (`#`, `;`) and unparsable addresses are skipped. IPv6 zone
/// suffixes (`fe80::1%eth0`) are dropped.
pub fn parse_nameservers(contents: &str) -> Vec<IpAddr> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("nameserver") => fields.next(),
                _ => None,
            }
        })
        .filter_map(|addr| addr.split('%').next()?.parse().ok())
        .collect()
}

/// First nameserver of the system resolver configuration, if readable.
pub fn system_nameserver() -> Option<IpAddr> {
    match std::fs::read_to_string(RESOLV_CONF_PATH) {
        Ok(contents) => parse_nameservers(&contents).into_iter().next(),
        Err(e) => {
            debug!(path = RESOLV_CONF_PATH, error = %e, "Cannot read resolver configuration");
            None
        }
    }
}
