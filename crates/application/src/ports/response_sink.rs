use async_trait::async_trait;
use prefer_dns_domain::{DnsMessage, DomainError};
use std::net::SocketAddr;

/// Where a handler delivers its final message.
///
/// Besides `write_message`, a sink exposes connection metadata that stages of
/// the chain may consult.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    async fn write_message(&mut self, message: DnsMessage) -> Result<(), DomainError>;

    fn client_addr(&self) -> SocketAddr;

    fn local_addr(&self) -> SocketAddr;

    /// Transport name, e.g. `"udp"`.
    fn transport(&self) -> &'static str;
}
