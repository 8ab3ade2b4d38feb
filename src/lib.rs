//! Disk head scheduling: six classical policies, a comparator, and an HTTP front end.

#![allow(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod scheduler;
pub mod web;

/// Prelude for convenient imports
pub mod prelude;

// Re-exports
pub use config::ServerConfig;
pub use error::{Result, SchedulerError};
pub use scheduler::{compare, schedule, Algorithm, Direction, PolicyEngine, PolicyResult, Workload};
