use prefer_dns_application::ports::DnsHandler;
use prefer_dns_application::use_cases::PreferFilter;
use prefer_dns_domain::Config;
use prefer_dns_infrastructure::dns::{LocalRecordsHandler, PreferMetrics};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub chain: Arc<dyn DnsHandler>,
    pub metrics: PreferMetrics,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let metrics = PreferMetrics::new();
        let local_records = Arc::new(LocalRecordsHandler::from_config(&config.local_records)?);

        info!(
            names = local_records.len(),
            "Loaded {} local DNS records",
            config.local_records.len()
        );

        let preference = config.dns.preference()?;
        info!(preference = preference.as_str(), "Prefer filter enabled");

        let chain: Arc<dyn DnsHandler> = Arc::new(
            PreferFilter::new(preference, Arc::new(metrics.clone())).with_next(local_records),
        );

        Ok(Self { chain, metrics })
    }
}
