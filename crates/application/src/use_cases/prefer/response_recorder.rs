use crate::ports::ResponseSink;
use async_trait::async_trait;
use prefer_dns_domain::{DnsMessage, DomainError};
use std::net::SocketAddr;

/// Stand-in sink that keeps the message a handler writes instead of
/// delivering it.
///
/// Metadata calls go to the wrapped sink; `write_message` never does. A
/// recorder serves exactly one invocation and is consumed by
/// [`ResponseRecorder::into_captured`].
pub struct ResponseRecorder<'a> {
    inner: &'a dyn ResponseSink,
    captured: Option<DnsMessage>,
}

impl<'a> ResponseRecorder<'a> {
    pub fn new(inner: &'a dyn ResponseSink) -> Self {
        Self {
            inner,
            captured: None,
        }
    }

    pub fn captured(&self) -> Option<&DnsMessage> {
        self.captured.as_ref()
    }

    /// `None` when the downstream chain never wrote a message.
    pub fn into_captured(self) -> Option<DnsMessage> {
        self.captured
    }
}

#[async_trait]
impl<'a> ResponseSink for ResponseRecorder<'a> {
    async fn write_message(&mut self, message: DnsMessage) -> Result<(), DomainError> {
        self.captured = Some(message);
        Ok(())
    }

    fn client_addr(&self) -> SocketAddr {
        self.inner.client_addr()
    }

    fn local_addr(&self) -> SocketAddr {
        self.inner.local_addr()
    }

    fn transport(&self) -> &'static str {
        self.inner.transport()
    }
}
