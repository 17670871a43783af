use async_trait::async_trait;
use rootwalk_application::ports::NameLookupPort;
use rootwalk_domain::{DomainError, RecordType, ResourceRecord};
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Lookup through the operating system resolver (`getaddrinfo`).
///
/// Only address records can be produced this way; TTLs are unknown and
/// reported as 0.
pub struct SystemNameResolver {
    timeout: Duration,
}

impl SystemNameResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl NameLookupPort for SystemNameResolver {
    async fn lookup(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let wants_v4 = match record_type {
            RecordType::A => true,
            RecordType::AAAA => false,
            other => return Err(DomainError::UnsupportedRecordType(other.to_string())),
        };

        let addrs_iter = tokio::time::timeout(self.timeout, tokio::net::lookup_host((hostname, 0)))
            .await
            .map_err(|_| DomainError::LookupTimeout(hostname.to_string()))?
            .map_err(|e| DomainError::LookupFailed {
                hostname: hostname.to_string(),
                reason: e.to_string(),
            })?;

        let mut addresses: Vec<IpAddr> = Vec::new();
        for addr in addrs_iter {
            let ip = addr.ip();
            if ip.is_ipv4() == wants_v4 && !addresses.contains(&ip) {
                addresses.push(ip);
            }
        }

        debug!(hostname = %hostname, found = addresses.len(), "System lookup finished");

        if addresses.is_empty() {
            return Err(DomainError::NoAnswer(hostname.to_string()));
        }

        Ok(addresses
            .into_iter()
            .map(|ip| ResourceRecord::new(hostname, record_type, 0, ip.to_string()))
            .collect())
    }
}
