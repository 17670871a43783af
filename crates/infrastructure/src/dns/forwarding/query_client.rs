use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{udp::UdpTransport, DnsTransport};
use async_trait::async_trait;
use rootwalk_application::ports::DnsQueryPort;
use rootwalk_domain::{DnsResponse, DomainError, QueryFailureKind, RecordType};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Sends one non-recursive A query per call over UDP.
pub struct UdpQueryClient {
    port: u16,
    timeout: Duration,
}

impl UdpQueryClient {
    pub fn new(port: u16, timeout: Duration) -> Self {
        Self { port, timeout }
    }
}

#[async_trait]
impl DnsQueryPort for UdpQueryClient {
    async fn query(&self, server: IpAddr, domain: &str) -> Result<DnsResponse, DomainError> {
        let server_addr = SocketAddr::new(server, self.port);

        let (id, request_bytes) = MessageBuilder::build_query(domain, RecordType::A, false)
            .map_err(|e| DomainError::query_failed(server_addr, QueryFailureKind::Transport, e))?;

        debug!(server = %server_addr, domain = %domain, id = id, "Sending iterative query");

        let transport = UdpTransport::new(server_addr);
        let reply = transport.send(&request_bytes, self.timeout).await?;

        let response = ResponseParser::parse(&reply.bytes)
            .map_err(|e| DomainError::query_failed(server_addr, QueryFailureKind::Decode, e))?;

        if !response.answers_question_for(domain) {
            return Err(DomainError::query_failed(
                server_addr,
                QueryFailureKind::Decode,
                format!(
                    "response question {:?} does not match {}",
                    response.question, domain
                ),
            ));
        }

        Ok(response)
    }
}
