/// Counter of queries suppressed by the preference filter, partitioned by
/// server label. Implementations must tolerate concurrent increments.
pub trait FilterMetricsPort: Send + Sync {
    fn record_filtered(&self, server: &str);
}
