mod dns_handler;
mod filter_metrics;
mod response_sink;

pub use dns_handler::{next_or_failure, DnsHandler};
pub use filter_metrics::FilterMetricsPort;
pub use response_sink::ResponseSink;

// Re-export for convenience
pub use prefer_dns_domain::{DnsMessage, DnsQuery, RequestContext, ResponseCode};
