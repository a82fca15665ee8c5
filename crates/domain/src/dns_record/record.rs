use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(Arc<str>),
    /// Presentation form of any other rdata.
    Other(Arc<str>),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(ip) => write!(f, "{}", ip),
            RecordData::Aaaa(ip) => write!(f, "{}", ip),
            RecordData::Cname(target) => write!(f, "{}", target),
            RecordData::Other(text) => write!(f, "{}", text),
        }
    }
}

/// One record of an answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: RecordData,
}

impl DnsAnswer {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data,
        }
    }

    pub fn a(name: impl Into<Arc<str>>, ip: Ipv4Addr, ttl: u32) -> Self {
        Self::new(name, RecordType::A, ttl, RecordData::A(ip))
    }

    pub fn aaaa(name: impl Into<Arc<str>>, ip: Ipv6Addr, ttl: u32) -> Self {
        Self::new(name, RecordType::AAAA, ttl, RecordData::Aaaa(ip))
    }

    pub fn cname(name: impl Into<Arc<str>>, target: impl Into<Arc<str>>, ttl: u32) -> Self {
        Self::new(name, RecordType::CNAME, ttl, RecordData::Cname(target.into()))
    }
}

impl fmt::Display for DnsAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN {} {}",
            self.name, self.ttl, self.record_type, self.data
        )
    }
}
