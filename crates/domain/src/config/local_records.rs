use super::errors::ConfigError;
use crate::{DnsAnswer, RecordData, RecordType};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalDnsRecord {
    pub name: String,

    pub record_type: String,

    pub value: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl LocalDnsRecord {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }

    /// Fully qualified owner name, always ending in a dot.
    pub fn fqdn(&self) -> String {
        if self.name.ends_with('.') {
            self.name.clone()
        } else {
            format!("{}.", self.name)
        }
    }

    pub fn to_answer(&self) -> Result<DnsAnswer, ConfigError> {
        let record_type: RecordType = self.record_type.parse().map_err(ConfigError::Validation)?;

        let data = match record_type {
            RecordType::A => RecordData::A(self.value.parse::<Ipv4Addr>().map_err(|e| {
                ConfigError::Validation(format!("Invalid A value '{}': {}", self.value, e))
            })?),
            RecordType::AAAA => RecordData::Aaaa(self.value.parse::<Ipv6Addr>().map_err(|e| {
                ConfigError::Validation(format!("Invalid AAAA value '{}': {}", self.value, e))
            })?),
            RecordType::CNAME => RecordData::Cname(self.value.as_str().into()),
            RecordType::TXT => RecordData::Other(self.value.as_str().into()),
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unsupported local record type: {}",
                    other
                )))
            }
        };

        Ok(DnsAnswer::new(
            self.fqdn(),
            record_type,
            self.ttl_or_default(),
            data,
        ))
    }
}
