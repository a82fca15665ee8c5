use dashmap::DashMap;
use prefer_dns_application::ports::FilterMetricsPort;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const FILTERED_METRIC_NAME: &str = "prefer_request_filtered_count_total";

/// Process-wide counter of suppressed queries, one series per server label.
///
/// Clones share the same series.
#[derive(Clone, Default)]
pub struct PreferMetrics {
    filtered: Arc<DashMap<Arc<str>, AtomicU64>>,
}

impl PreferMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered_count(&self, server: &str) -> u64 {
        self.filtered
            .get(server)
            .map(|v| v.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn total_filtered(&self) -> u64 {
        self.filtered
            .iter()
            .map(|entry| entry.value().load(Ordering::Relaxed))
            .sum()
    }

    /// `(server, count)` pairs sorted by server label.
    pub fn snapshot(&self) -> Vec<(String, u64)> {
        let mut series: Vec<_> = self
            .filtered
            .iter()
            .map(|entry| (entry.key().to_string(), entry.value().load(Ordering::Relaxed)))
            .collect();

        series.sort_by(|a, b| a.0.cmp(&b.0));
        series
    }

    /// Prometheus text exposition of the counter.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# HELP {} Counter of filtered requests.", FILTERED_METRIC_NAME);
        let _ = writeln!(out, "# TYPE {} counter", FILTERED_METRIC_NAME);
        for (server, count) in self.snapshot() {
            let _ = writeln!(
                out,
                "{}{{server=\"{}\"}} {}",
                FILTERED_METRIC_NAME,
                escape_label(&server),
                count
            );
        }
        out
    }
}

fn escape_label(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl FilterMetricsPort for PreferMetrics {
    fn record_filtered(&self, server: &str) {
        if let Some(counter) = self.filtered.get(server) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }

        self.filtered
            .entry(Arc::from(server))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }
}
