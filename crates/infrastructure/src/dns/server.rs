use crate::dns::wire::MessageCodec;
use async_trait::async_trait;
use prefer_dns_application::ports::{DnsHandler, ResponseSink};
use prefer_dns_domain::{DnsMessage, DomainError, RequestContext, ResponseCode};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Sink for one UDP exchange. Holds the encoded reply until the server loop
/// sends it.
pub struct UdpResponseSink {
    local: SocketAddr,
    client: SocketAddr,
    response: Option<Vec<u8>>,
}

impl UdpResponseSink {
    pub fn new(local: SocketAddr, client: SocketAddr) -> Self {
        Self {
            local,
            client,
            response: None,
        }
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }

    pub fn into_response(self) -> Option<Vec<u8>> {
        self.response
    }
}

#[async_trait]
impl ResponseSink for UdpResponseSink {
    async fn write_message(&mut self, message: DnsMessage) -> Result<(), DomainError> {
        if self.response.is_some() {
            return Err(DomainError::SinkWrite(format!(
                "response to {} already written",
                self.client
            )));
        }

        let bytes = MessageCodec::encode_message(&message)
            .map_err(|e| DomainError::SinkWrite(e.to_string()))?;
        self.response = Some(bytes);
        Ok(())
    }

    fn client_addr(&self) -> SocketAddr {
        self.client
    }

    fn local_addr(&self) -> SocketAddr {
        self.local
    }

    fn transport(&self) -> &'static str {
        "udp"
    }
}

/// Entry point of the handler chain for raw datagrams.
pub struct DnsServerHandler {
    chain: Arc<dyn DnsHandler>,
    server_label: Arc<str>,
}

impl DnsServerHandler {
    pub fn new(chain: Arc<dyn DnsHandler>, server_label: impl Into<Arc<str>>) -> Self {
        Self {
            chain,
            server_label: server_label.into(),
        }
    }

    pub fn server_label(&self) -> &str {
        &self.server_label
    }

    pub fn ready(&self) -> bool {
        self.chain.ready()
    }

    /// Run one datagram through the chain and return the bytes to send back.
    ///
    /// Every decodable request gets an answer: if the chain fails without
    /// writing, a SERVFAIL is synthesized. Packets with the QR bit set are
    /// never answered.
    pub async fn handle_packet(
        &self,
        packet: &[u8],
        local: SocketAddr,
        client: SocketAddr,
    ) -> Option<Vec<u8>> {
        if MessageCodec::is_response(packet) {
            debug!(client = %client, "Dropping inbound response packet");
            return None;
        }

        let query = match MessageCodec::decode_query(packet) {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %client, error = %e, "Dropping malformed request");
                let id = MessageCodec::peek_id(packet)?;
                return Self::encode_or_log(&DnsMessage::error_for_id(id, ResponseCode::FormErr));
            }
        };

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            client = %client,
            "DNS query received"
        );

        let ctx = RequestContext::new(self.server_label.clone(), client);
        let mut sink = UdpResponseSink::new(local, client);

        match self.chain.serve(&ctx, &query, &mut sink).await {
            Ok(rcode) => {
                debug!(domain = %query.domain, rcode = %rcode, "Query served");
            }
            Err(e) => {
                error!(domain = %query.domain, error = %e, "Query resolution failed");
            }
        }

        if sink.is_written() {
            return sink.into_response();
        }

        Self::encode_or_log(&DnsMessage::reply_to(&query).with_response_code(ResponseCode::ServFail))
    }

    fn encode_or_log(message: &DnsMessage) -> Option<Vec<u8>> {
        match MessageCodec::encode_message(message) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, "Failed to encode error response");
                None
            }
        }
    }
}
