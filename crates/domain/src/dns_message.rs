use super::{DnsAnswer, DnsQuery};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Unknown(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseCode::NoError)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A response as written to a response sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub id: u16,
    pub response_code: ResponseCode,
    pub question: Option<DnsQuery>,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub authoritative: bool,
    pub answers: Vec<DnsAnswer>,
}

impl DnsMessage {
    /// Empty NOERROR reply mirroring the query's id, question and RD flag.
    pub fn reply_to(query: &DnsQuery) -> Self {
        Self {
            id: query.id,
            response_code: ResponseCode::NoError,
            question: Some(query.clone()),
            recursion_desired: query.recursion_desired,
            recursion_available: false,
            authoritative: false,
            answers: Vec::new(),
        }
    }

    /// Reply for a request whose question could not be decoded.
    pub fn error_for_id(id: u16, response_code: ResponseCode) -> Self {
        Self {
            id,
            response_code,
            question: None,
            recursion_desired: false,
            recursion_available: false,
            authoritative: false,
            answers: Vec::new(),
        }
    }

    pub fn with_response_code(mut self, response_code: ResponseCode) -> Self {
        self.response_code = response_code;
        self
    }

    pub fn with_answers(mut self, answers: Vec<DnsAnswer>) -> Self {
        self.answers = answers;
        self
    }

    pub fn with_authoritative(mut self, authoritative: bool) -> Self {
        self.authoritative = authoritative;
        self
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }
}
