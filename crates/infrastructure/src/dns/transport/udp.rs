//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back. Each send binds its own ephemeral
//! socket, which is closed when the call returns on every path.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use rootwalk_domain::{DomainError, QueryFailureKind};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn failure(&self, kind: QueryFailureKind, detail: impl std::fmt::Display) -> DomainError {
        DomainError::query_failed(self.server_addr, kind, detail)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            self.failure(
                QueryFailureKind::Transport,
                format!("failed to bind UDP socket: {}", e),
            )
        })?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
            .await
            .map_err(|_| self.failure(QueryFailureKind::Timeout, "timed out sending query"))?
            .map_err(|e| {
                self.failure(
                    QueryFailureKind::Transport,
                    format!("failed to send query: {}", e),
                )
            })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| {
                    self.failure(
                        QueryFailureKind::Timeout,
                        format!("no response within {}ms", timeout.as_millis()),
                    )
                })?
                .map_err(|e| {
                    self.failure(
                        QueryFailureKind::Transport,
                        format!("failed to receive response: {}", e),
                    )
                })?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
            return Err(self.failure(
                QueryFailureKind::Transport,
                format!("response came from unexpected source {}", from_addr),
            ));
        }

        recv_buf.truncate(bytes_received);
        validate_response_id(message_bytes, &recv_buf, self.server_addr)?;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse { bytes: recv_buf })
    }
}

/// The reply must carry the transaction ID of the query.
pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::query_failed(
            server,
            QueryFailureKind::Decode,
            "message too short to carry a DNS ID",
        ));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);
    if query_id != response_id {
        return Err(DomainError::query_failed(
            server,
            QueryFailureKind::Decode,
            format!(
                "DNS ID mismatch: sent {:#06x}, received {:#06x}",
                query_id, response_id
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
