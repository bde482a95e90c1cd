use async_trait::async_trait;
use rootwalk_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// One query/response exchange against a name server.
///
/// The codec only ever sees byte buffers; implementors own the socket and
/// the receive ceiling (512 bytes for plain UDP without EDNS).
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        server: SocketAddr,
        payload: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
