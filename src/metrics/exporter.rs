use super::Collector;
use serde_json::{Map, Value};

/// Metrics exporter
pub struct MetricsExporter<'a> {
    collector: &'a Collector,
}

impl<'a> MetricsExporter<'a> {
    /// Create a new exporter
    pub fn new(collector: &'a Collector) -> Self {
        Self { collector }
    }

    /// Export metrics as a JSON array
    pub fn to_json(&self) -> Value {
        let metrics = self
            .collector
            .metrics()
            .iter()
            .map(|metric| {
                let labels: Map<String, Value> = metric
                    .labels()
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();

                serde_json::json!({
                    "name": metric.name(),
                    "type": format!("{:?}", metric.metric_type()),
                    "value": metric.value(),
                    "labels": labels,
                })
            })
            .collect();

        Value::Array(metrics)
    }

    /// Export metrics as pretty-printed JSON
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_json())
    }
}
