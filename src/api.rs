//! Request and response shapes of the `/schedule` endpoint.
//!
//! Payloads are parsed and range-checked here so the scheduling core only
//! ever sees well-formed workloads.

use crate::config::ServerConfig;
use crate::error::{Result, SchedulerError};
use crate::scheduler::{
    compare, schedule, Algorithm, CostTable, Cylinder, Direction, SeekDistance, Workload,
};
use serde::{Deserialize, Serialize};

/// Integer field that may arrive as a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntField {
    Int(i64),
    Text(String),
}

impl IntField {
    fn parse(&self, field: &'static str) -> Result<i64> {
        match self {
            IntField::Int(value) => Ok(*value),
            IntField::Text(text) => parse_int(text, field),
        }
    }
}

impl From<i64> for IntField {
    fn from(value: i64) -> Self {
        IntField::Int(value)
    }
}

/// Raw `/schedule` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Comma-separated cylinder numbers
    pub requests: String,
    pub head: IntField,
    pub cylinders: IntField,
    pub algorithm: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub compare: Option<bool>,
}

impl ScheduleRequest {
    /// Create a request with default direction and no comparison
    pub fn new(
        requests: impl Into<String>,
        head: i64,
        cylinders: i64,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            requests: requests.into(),
            head: head.into(),
            cylinders: cylinders.into(),
            algorithm: algorithm.into(),
            direction: None,
            compare: None,
        }
    }

    /// Set direction
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Request a comparison of all policies
    pub fn with_compare(mut self, compare: bool) -> Self {
        self.compare = Some(compare);
        self
    }

    /// Parse and range-check against `config` limits
    pub fn validate(&self, config: &ServerConfig) -> Result<Job> {
        let cylinders = self.cylinders.parse("cylinders")?;
        if cylinders < 1 || cylinders as u64 > config.max_cylinders {
            return Err(SchedulerError::OutOfRange {
                field: "cylinders",
                value: cylinders,
                limit: config.max_cylinders,
            });
        }
        let cylinders = cylinders as u64;

        let head = check_cylinder(self.head.parse("head")?, "head", cylinders)?;
        let requests = parse_requests(&self.requests, cylinders, config.max_requests)?;

        let algorithm: Algorithm = self.algorithm.trim().parse()?;
        let direction = match self.direction.as_deref() {
            Some(direction) => direction.trim().parse()?,
            None => Direction::default(),
        };

        Ok(Job::new(
            algorithm,
            direction,
            self.compare.unwrap_or(false),
            Workload::new(requests, head, cylinders),
        ))
    }
}

/// Validated unit of work for the scheduling core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    algorithm: Algorithm,
    direction: Direction,
    compare: bool,
    workload: Workload,
}

impl Job {
    /// Create a job from already-validated parts
    pub fn new(
        algorithm: Algorithm,
        direction: Direction,
        compare: bool,
        workload: Workload,
    ) -> Self {
        Self {
            algorithm,
            direction,
            compare,
            workload,
        }
    }

    /// Get algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Get direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a comparison was requested
    pub fn compare(&self) -> bool {
        self.compare
    }

    /// Get workload
    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    /// Run the requested policy and, if asked, the comparator
    pub fn run(&self) -> ScheduleResponse {
        let result = schedule(self.algorithm, &self.workload, self.direction);
        let total_seek = result.total_seek();

        let mut sequence = Vec::with_capacity(result.sequence().len() + 1);
        sequence.push(self.workload.head());
        sequence.extend(result.into_sequence());

        let optimal = self.compare.then(|| {
            let comparison = compare(&self.workload);
            OptimalSummary {
                algorithm: comparison.optimal(),
                seek_time: comparison.seek_time(),
                all_results: comparison.costs().clone(),
            }
        });

        ScheduleResponse {
            sequence,
            total_seek,
            optimal,
        }
    }
}

/// `/schedule` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResponse {
    /// Head position followed by the visit order
    pub sequence: Vec<Cylinder>,
    pub total_seek: SeekDistance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal: Option<OptimalSummary>,
}

/// Comparator section of the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimalSummary {
    pub algorithm: Algorithm,
    pub seek_time: SeekDistance,
    pub all_results: CostTable,
}

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn parse_int(text: &str, field: &'static str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| {
        SchedulerError::MalformedInput(format!("{} must be an integer, got '{}'", field, text))
    })
}

fn check_cylinder(value: i64, field: &'static str, cylinders: u64) -> Result<Cylinder> {
    if value < 0 || value as u64 >= cylinders {
        return Err(SchedulerError::OutOfRange {
            field,
            value,
            limit: cylinders - 1,
        });
    }
    Ok(value as Cylinder)
}

/// Parse the comma-separated queue. Blank input is an empty queue.
fn parse_requests(text: &str, cylinders: u64, max_requests: usize) -> Result<Vec<Cylinder>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<&str> = text.split(',').collect();
    if items.len() > max_requests {
        return Err(SchedulerError::OutOfRange {
            field: "requests",
            value: items.len() as i64,
            limit: max_requests as u64,
        });
    }

    items
        .into_iter()
        .map(|item| check_cylinder(parse_int(item, "requests")?, "requests", cylinders))
        .collect()
}
