//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). The receive buffer is the 512-byte
//! non-EDNS ceiling; anything larger arrives truncated and the TC bit is
//! the caller's signal.

use async_trait::async_trait;
use rootwalk_dns_application::ports::DnsTransport;
use rootwalk_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size without EDNS(0).
pub const MAX_UDP_RESPONSE_SIZE: usize = 512;

/// DNS over UDP transport
#[derive(Debug, Default)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        server: SocketAddr,
        payload: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns), matching the server family
        let bind_addr: SocketAddr = if server.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::Transport {
                server: server.to_string(),
                reason: format!("failed to bind UDP socket: {}", e),
            })?;

        // Connecting makes the kernel drop datagrams from other sources.
        socket
            .connect(server)
            .await
            .map_err(|e| DomainError::Transport {
                server: server.to_string(),
                reason: format!("failed to connect: {}", e),
            })?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send(payload))
            .await
            .map_err(|_| DomainError::QueryTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| DomainError::Transport {
                server: server.to_string(),
                reason: format!("send failed: {}", e),
            })?;

        debug!(%server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| DomainError::Transport {
                server: server.to_string(),
                reason: format!("receive failed: {}", e),
            })?;

        recv_buf.truncate(bytes_received);

        debug!(%server, bytes_received, "UDP response received");

        Ok(recv_buf)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
