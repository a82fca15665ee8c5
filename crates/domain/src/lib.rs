//! Prefer DNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod preference;
pub mod request_context;

pub use config::{CliOverrides, Config, ConfigError, LocalDnsRecord};
pub use dns_message::{DnsMessage, ResponseCode};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsAnswer, RecordData, RecordType};
pub use errors::DomainError;
pub use preference::IpPreference;
pub use request_context::RequestContext;
