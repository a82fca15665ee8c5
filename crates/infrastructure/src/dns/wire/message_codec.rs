//! DNS Message Codec
//!
//! Converts between wire-format bytes and the domain `DnsQuery` / `DnsMessage`
//! types using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use prefer_dns_domain::{
    DnsAnswer, DnsMessage, DnsQuery, DomainError, RecordData, RecordType, ResponseCode,
};
use std::str::FromStr;
use tracing::debug;

pub struct MessageCodec;

impl MessageCodec {
    /// Decode a request datagram into its (first) question.
    pub fn decode_query(bytes: &[u8]) -> Result<DnsQuery, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS request: {}", e))
        })?;

        if message.message_type() != MessageType::Query {
            return Err(DomainError::InvalidDnsMessage(
                "Expected a query, got a response".to_string(),
            ));
        }

        let query = message.queries().first().ok_or_else(|| {
            DomainError::InvalidDnsMessage("Request carries no question".to_string())
        })?;

        Ok(Self::query_from_hickory(query)
            .with_id(message.id())
            .with_recursion_desired(message.recursion_desired()))
    }

    /// Transaction id of a datagram too broken to decode, if it has one.
    pub fn peek_id(bytes: &[u8]) -> Option<u16> {
        match bytes {
            [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }

    /// True when the QR bit of the header is set.
    pub fn is_response(bytes: &[u8]) -> bool {
        bytes.get(2).is_some_and(|flags| flags & 0x80 != 0)
    }

    /// Decode a full response message.
    pub fn decode_message(bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })?;

        let question = message.queries().first().map(|q| {
            Self::query_from_hickory(q)
                .with_id(message.id())
                .with_recursion_desired(message.recursion_desired())
        });

        let answers: Vec<DnsAnswer> = message
            .answers()
            .iter()
            .map(Self::answer_from_hickory)
            .collect();

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = answers.len(),
            "DNS message decoded"
        );

        Ok(DnsMessage {
            id: message.id(),
            response_code: ResponseCode::from_u16(u16::from(message.response_code())),
            question,
            recursion_desired: message.recursion_desired(),
            recursion_available: message.recursion_available(),
            authoritative: message.authoritative(),
            answers,
        })
    }

    /// Encode a response message to wire format.
    pub fn encode_message(message: &DnsMessage) -> Result<Vec<u8>, DomainError> {
        let mut response = Message::new(message.id, MessageType::Response, OpCode::Query);
        response.set_recursion_desired(message.recursion_desired);
        response.set_recursion_available(message.recursion_available);
        response.set_authoritative(message.authoritative);
        let code = message.response_code.to_u16();
        response.set_response_code(HickoryResponseCode::from(
            (code >> 4) as u8,
            (code & 0xF) as u8,
        ));

        if let Some(question) = &message.question {
            response.add_query(Self::query_to_hickory(question)?);
        }

        for answer in &message.answers {
            response.add_answer(Self::answer_to_hickory(answer)?);
        }

        Self::serialize_message(&response)
    }

    /// Encode a request message; used by clients and tests.
    pub fn encode_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new(query.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.add_query(Self::query_to_hickory(query)?);

        Self::serialize_message(&message)
    }

    fn query_from_hickory(query: &Query) -> DnsQuery {
        DnsQuery::new(
            query.name().to_utf8(),
            RecordTypeMapper::from_hickory(query.query_type()),
        )
    }

    fn query_to_hickory(query: &DnsQuery) -> Result<Query, DomainError> {
        let mut hickory_query = Query::new();
        hickory_query.set_name(Self::parse_name(&query.domain)?);
        hickory_query.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        hickory_query.set_query_class(DNSClass::IN);
        Ok(hickory_query)
    }

    fn answer_from_hickory(record: &Record) -> DnsAnswer {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::Aaaa(aaaa.0),
            RData::CNAME(canonical) => RecordData::Cname(canonical.to_utf8().into()),
            other => RecordData::Other(other.to_string().into()),
        };

        DnsAnswer::new(
            record.name().to_utf8(),
            RecordTypeMapper::from_hickory(record.record_type()),
            record.ttl(),
            data,
        )
    }

    fn answer_to_hickory(answer: &DnsAnswer) -> Result<Record, DomainError> {
        let rdata = match (&answer.data, answer.record_type) {
            (RecordData::A(ip), _) => RData::A(A(*ip)),
            (RecordData::Aaaa(ip), _) => RData::AAAA(AAAA(*ip)),
            (RecordData::Cname(target), _) => RData::CNAME(CNAME(Self::parse_name(target)?)),
            (RecordData::Other(text), RecordType::TXT) => {
                RData::TXT(TXT::new(vec![text.to_string()]))
            }
            (RecordData::Other(_), other) => {
                return Err(DomainError::InvalidDnsMessage(format!(
                    "Cannot encode {} rdata from presentation form",
                    other
                )))
            }
        };

        Ok(Record::from_rdata(
            Self::parse_name(&answer.name)?,
            answer.ttl,
            rdata,
        ))
    }

    fn parse_name(domain: &str) -> Result<Name, DomainError> {
        Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
