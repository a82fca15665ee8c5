use async_trait::async_trait;
use prefer_dns_application::ports::{DnsHandler, ResponseSink};
use prefer_dns_domain::{
    ConfigError, DnsAnswer, DnsMessage, DnsQuery, DomainError, LocalDnsRecord, RecordType,
    RequestContext, ResponseCode,
};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

/// Terminal stage answering authoritatively from statically configured records.
///
/// A known name with no record of the asked type gets NOERROR/NODATA, an
/// unknown name gets NXDOMAIN. CNAME records of a name are returned for any
/// other query type as well.
pub struct LocalRecordsHandler {
    records: FxHashMap<Arc<str>, Vec<DnsAnswer>>,
}

impl LocalRecordsHandler {
    pub fn new(answers: Vec<DnsAnswer>) -> Self {
        let mut records: FxHashMap<Arc<str>, Vec<DnsAnswer>> = FxHashMap::default();
        for answer in answers {
            records
                .entry(Self::key(&answer.name))
                .or_default()
                .push(answer);
        }
        Self { records }
    }

    pub fn from_config(records: &[LocalDnsRecord]) -> Result<Self, ConfigError> {
        let answers = records
            .iter()
            .map(LocalDnsRecord::to_answer)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(answers))
    }

    /// Number of distinct owner names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `None` when the name is unknown.
    fn lookup(&self, query: &DnsQuery) -> Option<Vec<DnsAnswer>> {
        let records = self.records.get(&Self::key(&query.domain))?;
        Some(
            records
                .iter()
                .filter(|r| {
                    r.record_type == query.record_type
                        || (r.record_type == RecordType::CNAME
                            && query.record_type != RecordType::CNAME)
                })
                .cloned()
                .collect(),
        )
    }

    fn key(name: &str) -> Arc<str> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with('.') {
            lower.into()
        } else {
            format!("{}.", lower).into()
        }
    }
}

#[async_trait]
impl DnsHandler for LocalRecordsHandler {
    async fn serve(
        &self,
        _ctx: &RequestContext,
        query: &DnsQuery,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        let (rcode, answers) = match self.lookup(query) {
            Some(answers) => (ResponseCode::NoError, answers),
            None => (ResponseCode::NXDomain, Vec::new()),
        };

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            rcode = %rcode,
            answers = answers.len(),
            "Local records lookup"
        );

        let reply = DnsMessage::reply_to(query)
            .with_response_code(rcode)
            .with_answers(answers)
            .with_authoritative(true);

        sink.write_message(reply).await?;
        Ok(rcode)
    }

    fn name(&self) -> &'static str {
        "local_records"
    }
}
