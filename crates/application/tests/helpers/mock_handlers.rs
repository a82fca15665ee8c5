#![allow(dead_code)]

use async_trait::async_trait;
use prefer_dns_application::ports::{DnsHandler, FilterMetricsPort, ResponseSink};
use prefer_dns_domain::{
    DnsAnswer, DnsMessage, DnsQuery, DomainError, RecordType, RequestContext, ResponseCode,
};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Terminal handler answering from a fixed record table.
///
/// Every query it sees is recorded so tests can assert how often, and with
/// what, the chain was invoked.
#[derive(Clone, Default)]
pub struct ZoneHandler {
    records: Arc<Mutex<Vec<DnsAnswer>>>,
    calls: Arc<Mutex<Vec<DnsQuery>>>,
    failing_types: Arc<Mutex<HashSet<RecordType>>>,
    silent_types: Arc<Mutex<HashSet<RecordType>>>,
}

impl ZoneHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A for `example.org.` and AAAA for `example.net.`.
    pub fn example_zone() -> Self {
        let handler = Self::new();
        handler.add_record(DnsAnswer::a(
            "example.org.",
            "127.0.0.1".parse().unwrap(),
            300,
        ));
        handler.add_record(DnsAnswer::aaaa(
            "example.net.",
            "::1".parse().unwrap(),
            300,
        ));
        handler
    }

    pub fn add_record(&self, record: DnsAnswer) {
        self.records.lock().unwrap().push(record);
    }

    /// Return an error, writing nothing, for queries of this type.
    pub fn fail_on(&self, record_type: RecordType) {
        self.failing_types.lock().unwrap().insert(record_type);
    }

    /// Return success but write nothing for queries of this type.
    pub fn silent_on(&self, record_type: RecordType) {
        self.silent_types.lock().unwrap().insert(record_type);
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsHandler for ZoneHandler {
    async fn serve(
        &self,
        _ctx: &RequestContext,
        query: &DnsQuery,
        sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        self.calls.lock().unwrap().push(query.clone());

        if self.failing_types.lock().unwrap().contains(&query.record_type) {
            return Err(DomainError::Downstream(format!(
                "upstream unreachable for {}",
                query.domain
            )));
        }
        if self.silent_types.lock().unwrap().contains(&query.record_type) {
            return Ok(ResponseCode::NoError);
        }

        let answers: Vec<DnsAnswer> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.record_type == query.record_type && query.same_name(&r.name))
            .cloned()
            .collect();

        sink.write_message(DnsMessage::reply_to(query).with_answers(answers))
            .await?;
        Ok(ResponseCode::NoError)
    }

    fn name(&self) -> &'static str {
        "zone"
    }
}

/// Response sink that keeps everything written to it.
pub struct MockResponseSink {
    written: Vec<DnsMessage>,
    fail_writes: bool,
    client: SocketAddr,
}

impl MockResponseSink {
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            fail_writes: false,
            client: "192.168.1.100:53000".parse().unwrap(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn written(&self) -> &[DnsMessage] {
        &self.written
    }

    pub fn last(&self) -> Option<&DnsMessage> {
        self.written.last()
    }
}

impl Default for MockResponseSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseSink for MockResponseSink {
    async fn write_message(&mut self, message: DnsMessage) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::SinkWrite("connection closed".to_string()));
        }
        self.written.push(message);
        Ok(())
    }

    fn client_addr(&self) -> SocketAddr {
        self.client
    }

    fn local_addr(&self) -> SocketAddr {
        "127.0.0.1:53".parse().unwrap()
    }

    fn transport(&self) -> &'static str {
        "udp"
    }
}

#[derive(Default)]
pub struct MockFilterMetrics {
    counts: Mutex<HashMap<String, u64>>,
}

impl MockFilterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, server: &str) -> u64 {
        self.counts.lock().unwrap().get(server).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.lock().unwrap().values().sum()
    }
}

impl FilterMetricsPort for MockFilterMetrics {
    fn record_filtered(&self, server: &str) {
        *self
            .counts
            .lock()
            .unwrap()
            .entry(server.to_string())
            .or_insert(0) += 1;
    }
}
