use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server listens on
    pub bind_addr: String,

    /// Number of runtime worker threads
    pub workers: usize,

    /// Maximum number of pending requests in one workload
    pub max_requests: usize,

    /// Maximum disk extent accepted
    pub max_cylinders: u64,

    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            workers: num_cpus::get(),
            max_requests: 10_000,
            max_cylinders: 1_000_000,
            enable_metrics: true,
        }
    }

    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SchedulerError::Config(format!("could not read '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(SchedulerError::Config("workers must be at least 1".into()));
        }
        if self.max_requests == 0 {
            return Err(SchedulerError::Config("max_requests must be at least 1".into()));
        }
        if self.max_cylinders == 0 || self.max_cylinders > i64::MAX as u64 {
            return Err(SchedulerError::Config(format!(
                "max_cylinders must be in 1..={}",
                i64::MAX
            )));
        }
        Ok(())
    }

    /// Set bind address
    pub fn with_bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = addr.into();
        self
    }

    /// Set worker threads
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set maximum queue length
    pub fn with_max_requests(mut self, max_requests: usize) -> Self {
        self.max_requests = max_requests;
        self
    }

    /// Set maximum disk extent
    pub fn with_max_cylinders(mut self, max_cylinders: u64) -> Self {
        self.max_cylinders = max_cylinders;
        self
    }

    /// Enable/disable metrics
    pub fn with_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
