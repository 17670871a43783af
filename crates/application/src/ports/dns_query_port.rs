use async_trait::async_trait;
use rootwalk_domain::{DnsResponse, DomainError};
use std::net::IpAddr;

/// Sends exactly one A query for `domain` to `server` and decodes the reply.
///
/// Every failure (timeout, socket error, undecodable reply) comes back as
/// `DomainError::QueryFailed`. Implementations never retry.
#[async_trait]
pub trait DnsQueryPort: Send + Sync {
    async fn query(&self, server: IpAddr, domain: &str) -> Result<DnsResponse, DomainError>;
}
