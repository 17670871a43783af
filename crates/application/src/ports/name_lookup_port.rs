use async_trait::async_trait;
use rootwalk_domain::{DomainError, RecordType, ResourceRecord};
use std::net::IpAddr;

/// Resolver that performs the whole walk on our behalf.
#[async_trait]
pub trait NameLookupPort: Send + Sync {
    async fn lookup(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError>;

    /// A records of `hostname` as addresses. An answer without any A record
    /// is `DomainError::NoAnswer`.
    async fn lookup_addresses(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        let records = self.lookup(hostname, RecordType::A).await?;
        let addresses: Vec<IpAddr> = records
            .iter()
            .filter(|r| r.record_type == RecordType::A)
            .filter_map(ResourceRecord::ip_addr)
            .collect();

        if addresses.is_empty() {
            return Err(DomainError::NoAnswer(hostname.to_string()));
        }
        Ok(addresses)
    }
}
