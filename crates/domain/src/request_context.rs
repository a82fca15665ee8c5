use std::net::SocketAddr;
use std::sync::Arc;

/// Per-request state handed to every stage of the handler chain.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub server: Arc<str>,
    pub client: SocketAddr,
}

impl RequestContext {
    pub fn new(server: impl Into<Arc<str>>, client: SocketAddr) -> Self {
        Self {
            server: server.into(),
            client,
        }
    }

    /// Label identifying the server instance, e.g. `dns://0.0.0.0:53`.
    pub fn server_label(&self) -> &str {
        &self.server
    }
}
