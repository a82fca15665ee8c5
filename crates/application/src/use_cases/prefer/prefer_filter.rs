use super::ResponseRecorder;
use crate::ports::{next_or_failure, DnsHandler, FilterMetricsPort, ResponseSink};
use async_trait::async_trait;
use prefer_dns_domain::{
    DnsMessage, DnsQuery, DomainError, IpPreference, RecordType, RequestContext, ResponseCode,
};
use std::sync::Arc;
use tracing::debug;

/// Suppresses answers for the non-preferred address family when the
/// preferred family resolves.
///
/// For a query of the non-preferred family the filter first resolves the
/// complementary type through the rest of the chain, capturing the result in
/// a [`ResponseRecorder`]. If that shadow lookup yields answers the client
/// gets an empty NOERROR reply; otherwise the original query is forwarded
/// untouched.
///
/// A failing shadow lookup counts as "no answer": the filter fails open and
/// forwards the original query rather than risk leaving it unanswered.
pub struct PreferFilter {
    next: Option<Arc<dyn DnsHandler>>,
    preference: IpPreference,
    metrics: Arc<dyn FilterMetricsPort>,
}

impl PreferFilter {
    pub const NAME: &'static str = "prefer";

    pub fn new(preference: IpPreference, metrics: Arc<dyn FilterMetricsPort>) -> Self {
        Self {
            next: None,
            preference,
            metrics,
        }
    }

    pub fn with_next(mut self, next: Arc<dyn DnsHandler>) -> Self {
        self.next = Some(next);
        self
    }

    pub fn preference(&self) -> IpPreference {
        self.preference
    }

    /// Type to probe before answering `record_type`, or `None` when the query
    /// passes straight through.
    fn check_type(&self, record_type: RecordType) -> Option<RecordType> {
        if self.preference.is_preferred(record_type) {
            return None;
        }
        record_type.complement()
    }
}

#[async_trait]
impl DnsHandler for PreferFilter {
    async fn serve(
        &self,
        ctx: &RequestContext,
        query: &DnsQuery,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        let Some(check_type) = self.check_type(query.record_type) else {
            return next_or_failure(Self::NAME, self.next.as_ref(), ctx, query, sink).await;
        };

        let Some(next) = self.next.as_ref() else {
            return Err(DomainError::NoNextHandler(Self::NAME));
        };

        let shadow = query.shadow(check_type);
        let mut recorder = ResponseRecorder::new(&*sink);

        let shadow_result = next.serve(ctx, &shadow, &mut recorder).await;
        let captured = recorder.into_captured();

        if let Err(e) = shadow_result {
            debug!(
                domain = %query.domain,
                check_type = %check_type,
                error = %e,
                "Error while checking for alternate record type"
            );
            return next.serve(ctx, query, sink).await;
        }

        let preferred_exists = captured.is_some_and(|message| message.has_answers());

        if !preferred_exists {
            return next.serve(ctx, query, sink).await;
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            check_type = %check_type,
            "Filtering request because preferred record type exists"
        );
        self.metrics.record_filtered(ctx.server_label());

        sink.write_message(DnsMessage::reply_to(query)).await?;
        Ok(ResponseCode::NoError)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
