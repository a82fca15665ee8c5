pub mod local_records;
pub mod metrics;
pub mod server;
pub mod wire;

pub use local_records::LocalRecordsHandler;
pub use metrics::PreferMetrics;
pub use server::{DnsServerHandler, UdpResponseSink};
pub use wire::{MessageCodec, RecordTypeMapper};
