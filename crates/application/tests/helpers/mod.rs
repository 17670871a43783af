#![allow(dead_code)]

mod mock_ports;

pub use mock_ports::{MockDnsQuery, MockNameLookup};

use rootwalk_domain::{DnsResponse, NameserverSet, RecordType, ResourceRecord, ResponseCode};
use std::net::IpAddr;

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn nameservers(ips: &[&str]) -> NameserverSet {
    ips.iter().map(|s| ip(s)).collect()
}

/// Referral for `zone` naming `hosts` in its authority section.
pub fn referral(zone: &str, hosts: &[&str]) -> DnsResponse {
    hosts.iter().fold(DnsResponse::new(1, ResponseCode::NoError), |resp, host| {
        resp.with_authority(ResourceRecord::new(zone, RecordType::NS, 172800, *host))
    })
}

pub fn a_answer(owner: &str, addr: &str) -> DnsResponse {
    DnsResponse::new(1, ResponseCode::NoError)
        .with_answer(ResourceRecord::new(owner, RecordType::A, 300, addr))
}

pub fn a_records(owner: &str, addrs: &[&str]) -> Vec<ResourceRecord> {
    addrs
        .iter()
        .map(|a| ResourceRecord::new(owner, RecordType::A, 300, *a))
        .collect()
}
