//! Prelude for convenient imports

// Scheduling core
pub use crate::scheduler::{
    c_look, c_scan, compare, fcfs, look, path_length, scan, schedule, sstf, Algorithm,
    ComparisonResult, CostTable, Cylinder, Direction, PolicyEngine, PolicyResult, SeekDistance,
    Sweep, Turn, Workload,
};

// HTTP front end
pub use crate::api::{ErrorBody, IntField, Job, OptimalSummary, ScheduleRequest, ScheduleResponse};
pub use crate::web::{router, AppState};

// Config
pub use crate::config::ServerConfig;

// Metrics
pub use crate::metrics::{Collector, Metric, MetricType, MetricsExporter};

// Error
pub use crate::error::SchedulerError;
