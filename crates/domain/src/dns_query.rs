use super::RecordType;
use std::sync::Arc;

/// A single question as it travels down the handler chain.
///
/// `id` is the transaction identity that correlates a reply with its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub id: u16,
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            id: 0,
            domain: domain.into(),
            record_type,
            recursion_desired: true,
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    /// Build a fresh query for the same name and RD flag but a different type.
    ///
    /// The new query gets its own random transaction id so a reply to it can
    /// never be mistaken for a reply to `self`.
    pub fn shadow(&self, record_type: RecordType) -> Self {
        Self {
            id: fastrand::u16(..),
            domain: self.domain.clone(),
            record_type,
            recursion_desired: self.recursion_desired,
        }
    }

    /// Case-insensitive name comparison, ignoring a trailing root dot.
    pub fn same_name(&self, other: &str) -> bool {
        normalize(&self.domain).eq_ignore_ascii_case(normalize(other))
    }
}

fn normalize(name: &str) -> &str {
    match name.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}
