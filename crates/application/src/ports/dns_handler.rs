use super::ResponseSink;
use async_trait::async_trait;
use prefer_dns_domain::{DnsQuery, DomainError, RequestContext, ResponseCode};
use std::sync::Arc;

/// One stage of a linear handler chain.
#[async_trait]
pub trait DnsHandler: Send + Sync {
    /// Serve `query`, delivering any reply through `sink`.
    async fn serve(
        &self,
        ctx: &RequestContext,
        query: &DnsQuery,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError>;

    fn name(&self) -> &'static str;

    /// Ready to take queries. Stages without warm-up state are always ready.
    fn ready(&self) -> bool {
        true
    }
}

/// Forward to `next`, or fail when `plugin` is the last stage of the chain.
pub async fn next_or_failure(
    plugin: &'static str,
    next: Option<&Arc<dyn DnsHandler>>,
    ctx: &RequestContext,
    query: &DnsQuery,
    sink: &mut dyn ResponseSink,
) -> Result<ResponseCode, DomainError> {
    match next {
        Some(next) => next.serve(ctx, query, sink).await,
        None => Err(DomainError::NoNextHandler(plugin)),
    }
}
