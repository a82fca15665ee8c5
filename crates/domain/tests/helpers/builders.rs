#![allow(dead_code)]
use prefer_dns_domain::LocalDnsRecord;

pub struct LocalRecordBuilder {
    name: String,
    record_type: String,
    value: String,
    ttl: Option<u32>,
}

impl LocalRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.org".to_string(),
            record_type: "A".to_string(),
            value: "127.0.0.1".to_string(),
            ttl: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn build(self) -> LocalDnsRecord {
        LocalDnsRecord {
            name: self.name,
            record_type: self.record_type,
            value: self.value,
            ttl: self.ttl,
        }
    }
}

impl Default for LocalRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
