//! Request counters for the HTTP front end

/// Metrics collector
pub mod collector;
/// Metrics exporter
pub mod exporter;

pub use collector::{Collector, Metric, MetricType};
pub use exporter::MetricsExporter;
