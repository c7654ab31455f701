//! Payload size distribution sinks

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;

/// Metric name under which serialized envelope sizes are recorded
pub const PAYLOAD_SIZE_METRIC: &str = "payload_size_bytes";

/// Receives size samples. Implementations must tolerate concurrent appends.
pub trait SizeSink: Send + Sync {
    fn record(&self, metric: &str, bytes: u64);
}

/// Discards every sample
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSizeSink;

impl SizeSink for NoopSizeSink {
    fn record(&self, _metric: &str, _bytes: u64) {}
}

/// Summary statistics of one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub p50: u64,
    pub p95: u64,
    pub p99: u64,
}

/// In-memory distribution of samples per metric name.
///
/// Sample order across threads is unspecified.
#[derive(Debug, Default)]
pub struct PayloadSizeTrend {
    samples: Mutex<HashMap<String, Vec<u64>>>,
}

impl PayloadSizeTrend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the samples recorded under `metric`
    pub fn samples(&self, metric: &str) -> Vec<u64> {
        self.samples
            .lock()
            .get(metric)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, metric: &str) -> usize {
        self.samples.lock().get(metric).map_or(0, Vec::len)
    }

    /// Summary of `metric`, or `None` when nothing was recorded
    pub fn summary(&self, metric: &str) -> Option<TrendSummary> {
        let mut sorted = self.samples(metric);
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_unstable();

        let count = sorted.len();
        let total: u128 = sorted.iter().map(|&value| u128::from(value)).sum();
        Some(TrendSummary {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean: total as f64 / count as f64,
            p50: percentile(&sorted, 50),
            p95: percentile(&sorted, 95),
            p99: percentile(&sorted, 99),
        })
    }

    pub fn clear(&self) {
        self.samples.lock().clear();
    }
}

impl SizeSink for PayloadSizeTrend {
    fn record(&self, metric: &str, bytes: u64) {
        self.samples
            .lock()
            .entry(metric.to_string())
            .or_default()
            .push(bytes);
    }
}

/// Nearest-rank percentile of a sorted, non-empty slice
fn percentile(sorted: &[u64], pct: usize) -> u64 {
    let rank = (sorted.len() * pct / 100).min(sorted.len() - 1);
    sorted[rank]
}
