use crate::scheduler::{Algorithm, SeekDistance};
use serde::{Deserialize, Serialize};

/// Type of metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricType {
    /// Counter (monotonically increasing)
    Counter,
}

/// Metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    name: String,
    metric_type: MetricType,
    value: u64,
    labels: Vec<(String, String)>,
}

impl Metric {
    /// Create a new metric
    pub fn new(name: impl Into<String>, metric_type: MetricType, value: u64) -> Self {
        Self {
            name: name.into(),
            metric_type,
            value,
            labels: Vec::new(),
        }
    }

    /// Add label
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.push((key.into(), value.into()));
        self
    }

    /// Get name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get type
    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }

    /// Get value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Get labels
    pub fn labels(&self) -> &[(String, String)] {
        &self.labels
    }

    fn matches(&self, name: &str, labels: &[(&str, &str)]) -> bool {
        self.name == name
            && self.labels.len() == labels.len()
            && self
                .labels
                .iter()
                .zip(labels)
                .all(|((k, v), (lk, lv))| k == lk && v == lv)
    }
}

/// Counters for the schedule endpoint
#[derive(Debug, Default)]
pub struct Collector {
    metrics: Vec<Metric>,
}

impl Collector {
    /// Create a new collector
    pub fn new() -> Self {
        Self {
            metrics: Vec::new(),
        }
    }

    /// Add `by` to the counter identified by `name` and `labels`, creating it on first use
    pub fn increment(&mut self, name: &str, labels: &[(&str, &str)], by: u64) {
        if let Some(metric) = self.metrics.iter_mut().find(|m| m.matches(name, labels)) {
            metric.value = metric.value.saturating_add(by);
            return;
        }

        let metric = labels
            .iter()
            .fold(Metric::new(name, MetricType::Counter, by), |metric, (k, v)| {
                metric.with_label(*k, *v)
            });
        self.metrics.push(metric);
    }

    /// Record one served schedule request
    pub fn record_schedule(&mut self, algorithm: Algorithm, total_seek: SeekDistance) {
        let labels = [("algorithm", algorithm.name())];
        self.increment("schedule_requests_total", &labels, 1);
        self.increment("seek_distance_total", &labels, total_seek);
    }

    /// Record one comparator run and its winner
    pub fn record_comparison(&mut self, optimal: Algorithm) {
        self.increment("comparisons_total", &[], 1);
        self.increment(
            "optimal_selected_total",
            &[("algorithm", optimal.name())],
            1,
        );
    }

    /// Record a rejected request
    pub fn record_rejection(&mut self, reason: &str) {
        self.increment("rejected_requests_total", &[("reason", reason)], 1);
    }

    /// Current value of a counter, if it has been touched
    pub fn value(&self, name: &str, labels: &[(&str, &str)]) -> Option<u64> {
        self.metrics
            .iter()
            .find(|m| m.matches(name, labels))
            .map(Metric::value)
    }

    /// Get all metrics
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Clear metrics
    pub fn clear(&mut self) {
        self.metrics.clear();
    }
}
