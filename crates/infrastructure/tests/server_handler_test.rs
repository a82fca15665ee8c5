mod helpers;

use helpers::{chain, local, query_bytes, CLIENT};
use prefer_dns_application::ports::{DnsHandler, ResponseSink};
use prefer_dns_domain::{
    DnsMessage, DnsQuery, DomainError, IpPreference, RecordType, RequestContext, ResponseCode,
};
use prefer_dns_infrastructure::dns::{DnsServerHandler, MessageCodec, PreferMetrics, UdpResponseSink};
use std::sync::Arc;

const SERVER: &str = "dns://127.0.0.1:53";

async fn exchange(handler: &DnsServerHandler, packet: &[u8]) -> DnsMessage {
    let bytes = handler
        .handle_packet(packet, local(), CLIENT.parse().unwrap())
        .await
        .expect("a reply");
    MessageCodec::decode_message(&bytes).unwrap()
}

#[tokio::test]
async fn test_prefer_ipv4_suppresses_aaaa_over_the_wire() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);

    let reply = exchange(&handler, &query_bytes("example.org.", RecordType::AAAA, 0x0101)).await;

    assert_eq!(reply.id, 0x0101);
    assert_eq!(reply.response_code, ResponseCode::NoError);
    assert!(reply.answers.is_empty());
    assert_eq!(reply.question.unwrap().record_type, RecordType::AAAA);
    assert_eq!(metrics.filtered_count(SERVER), 1);
}

#[tokio::test]
async fn test_prefer_ipv4_passes_aaaa_without_a_record() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);

    let reply = exchange(&handler, &query_bytes("example.net.", RecordType::AAAA, 2)).await;

    assert_eq!(reply.answers.len(), 1);
    assert_eq!(reply.answers[0].record_type, RecordType::AAAA);
    assert_eq!(metrics.total_filtered(), 0);
}

#[tokio::test]
async fn test_prefer_ipv6_suppresses_a_over_the_wire() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv6, &metrics), SERVER);

    let reply = exchange(&handler, &query_bytes("example.net.", RecordType::A, 3)).await;

    assert!(reply.answers.is_empty());
    assert_eq!(metrics.filtered_count(SERVER), 1);
}

#[tokio::test]
async fn test_prefer_ipv6_passes_a_without_aaaa_record() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv6, &metrics), SERVER);

    let reply = exchange(&handler, &query_bytes("example.org.", RecordType::A, 4)).await;

    assert_eq!(reply.answers.len(), 1);
    assert_eq!(metrics.total_filtered(), 0);
}

#[tokio::test]
async fn test_nxdomain_passes_through_filter() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);

    let reply = exchange(&handler, &query_bytes("missing.example.", RecordType::AAAA, 5)).await;

    assert_eq!(reply.response_code, ResponseCode::NXDomain);
    assert_eq!(metrics.total_filtered(), 0);
}

#[tokio::test]
async fn test_malformed_packet_gets_formerr() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);

    let reply = exchange(&handler, &[0xAB, 0xCD, 0x01]).await;

    assert_eq!(reply.id, 0xABCD);
    assert_eq!(reply.response_code, ResponseCode::FormErr);
}

#[tokio::test]
async fn test_packet_without_id_is_dropped() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);

    let reply = handler
        .handle_packet(&[0x01], local(), CLIENT.parse().unwrap())
        .await;

    assert!(reply.is_none());
}

#[tokio::test]
async fn test_inbound_response_is_not_answered() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);
    let formerr = MessageCodec::encode_message(&DnsMessage::error_for_id(7, ResponseCode::FormErr))
        .unwrap();
    let answer = MessageCodec::encode_message(&DnsMessage::reply_to(
        &DnsQuery::new("example.org.", RecordType::A).with_id(8),
    ))
    .unwrap();

    for packet in [formerr, answer] {
        let reply = handler
            .handle_packet(&packet, local(), CLIENT.parse().unwrap())
            .await;
        assert!(reply.is_none());
    }
    assert_eq!(metrics.total_filtered(), 0);
}

#[tokio::test]
async fn test_truncated_response_header_is_not_answered() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);

    let reply = handler
        .handle_packet(&[0xAB, 0xCD, 0x80], local(), CLIENT.parse().unwrap())
        .await;

    assert!(reply.is_none());
}

struct BrokenHandler;

#[async_trait::async_trait]
impl DnsHandler for BrokenHandler {
    async fn serve(
        &self,
        _ctx: &RequestContext,
        query: &DnsQuery,
        _sink: &mut dyn ResponseSink,
    ) -> Result<ResponseCode, DomainError> {
        Err(DomainError::Downstream(format!("no route for {}", query.domain)))
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}

#[tokio::test]
async fn test_chain_failure_yields_servfail() {
    let handler = DnsServerHandler::new(Arc::new(BrokenHandler), SERVER);

    let reply = exchange(&handler, &query_bytes("example.org.", RecordType::TXT, 6)).await;

    assert_eq!(reply.id, 6);
    assert_eq!(reply.response_code, ResponseCode::ServFail);
}

#[tokio::test]
async fn test_sink_accepts_a_single_write() {
    let mut sink = UdpResponseSink::new(local(), CLIENT.parse().unwrap());
    let reply = DnsMessage::reply_to(&DnsQuery::new("example.org.", RecordType::A));

    sink.write_message(reply.clone()).await.unwrap();
    let second = sink.write_message(reply).await;

    assert!(matches!(second, Err(DomainError::SinkWrite(_))));
    assert_eq!(sink.transport(), "udp");
    assert_eq!(sink.client_addr(), CLIENT.parse().unwrap());
}

#[test]
fn test_server_handler_reports_chain_readiness() {
    let metrics = PreferMetrics::new();
    let handler = DnsServerHandler::new(chain(IpPreference::Ipv4, &metrics), SERVER);

    assert!(handler.ready());
    assert_eq!(handler.server_label(), SERVER);
}
