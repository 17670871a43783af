use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::{udp::UdpTransport, DnsTransport};
use async_trait::async_trait;
use rootwalk_application::ports::NameLookupPort;
use rootwalk_domain::{DomainError, QueryFailureKind, RecordType, ResourceRecord, ResponseCode};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Lookup through a recursive server: one recursion-desired UDP query per
/// call, answered records filtered to the requested type.
///
/// UDP only. A truncated reply fails the lookup instead of retrying over TCP.
pub struct StubNameResolver {
    server: SocketAddr,
    timeout: Duration,
}

impl StubNameResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self { server, timeout }
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }
}

#[async_trait]
impl NameLookupPort for StubNameResolver {
    async fn lookup(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let (_, request_bytes) = MessageBuilder::build_query(hostname, record_type, true)?;

        debug!(
            server = %self.server,
            hostname = %hostname,
            record_type = %record_type,
            "Stub lookup"
        );

        let transport = UdpTransport::new(self.server);
        let reply = transport
            .send(&request_bytes, self.timeout)
            .await
            .map_err(|e| match e {
                DomainError::QueryFailed {
                    kind: QueryFailureKind::Timeout,
                    ..
                } => DomainError::LookupTimeout(hostname.to_string()),
                other => DomainError::LookupFailed {
                    hostname: hostname.to_string(),
                    reason: other.to_string(),
                },
            })?;

        let response = ResponseParser::parse(&reply.bytes).map_err(|e| DomainError::LookupFailed {
            hostname: hostname.to_string(),
            reason: e.to_string(),
        })?;

        if response.truncated {
            warn!(hostname = %hostname, server = %self.server, "Stub response truncated");
            return Err(DomainError::LookupFailed {
                hostname: hostname.to_string(),
                reason: "response truncated".to_string(),
            });
        }

        match response.rcode {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain => return Err(DomainError::NxDomain(hostname.to_string())),
            rcode => {
                return Err(DomainError::LookupFailed {
                    hostname: hostname.to_string(),
                    reason: format!("server answered {}", rcode),
                })
            }
        }

        let records: Vec<ResourceRecord> = response.answers_of(record_type).cloned().collect();
        if records.is_empty() {
            return Err(DomainError::NoAnswer(hostname.to_string()));
        }
        Ok(records)
    }
}
