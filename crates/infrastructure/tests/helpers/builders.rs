#![allow(dead_code)]
use prefer_dns_application::ports::DnsHandler;
use prefer_dns_application::use_cases::PreferFilter;
use prefer_dns_domain::{DnsAnswer, DnsQuery, IpPreference, RecordType};
use prefer_dns_infrastructure::dns::{LocalRecordsHandler, MessageCodec, PreferMetrics};
use std::net::SocketAddr;
use std::sync::Arc;

pub const CLIENT: &str = "192.168.1.100:53000";

pub fn local() -> SocketAddr {
    "127.0.0.1:53".parse().unwrap()
}

/// A for `example.org.` and AAAA for `example.net.`.
pub fn example_zone() -> LocalRecordsHandler {
    LocalRecordsHandler::new(vec![
        DnsAnswer::a("example.org.", "127.0.0.1".parse().unwrap(), 300),
        DnsAnswer::aaaa("example.net.", "::1".parse().unwrap(), 300),
    ])
}

pub fn chain(preference: IpPreference, metrics: &PreferMetrics) -> Arc<dyn DnsHandler> {
    Arc::new(
        PreferFilter::new(preference, Arc::new(metrics.clone()))
            .with_next(Arc::new(example_zone())),
    )
}

pub fn query_bytes(domain: &str, record_type: RecordType, id: u16) -> Vec<u8> {
    MessageCodec::encode_query(&DnsQuery::new(domain, record_type).with_id(id)).unwrap()
}
