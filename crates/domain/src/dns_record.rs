mod record;
mod record_type;

pub use record::{DnsAnswer, RecordData};
pub use record_type::RecordType;
