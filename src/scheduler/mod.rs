//! Disk head scheduling policies and the policy comparator

/// Policy comparator
pub mod comparator;
/// Policy dispatch
pub mod engine;
/// First come, first served
pub mod fcfs;
/// Algorithm and direction identifiers
pub mod policy;
/// Shortest seek time first
pub mod sstf;
/// SCAN, LOOK, C-SCAN, C-LOOK
pub mod sweep;
/// Workload and result types
pub mod workload;

pub use comparator::{compare, ComparisonResult, CostTable};
pub use engine::{schedule, PolicyEngine};
pub use fcfs::fcfs;
pub use policy::{Algorithm, Direction};
pub use sstf::sstf;
pub use sweep::{c_look, c_scan, look, scan, Sweep, Turn};
pub use workload::{path_length, Cylinder, PolicyResult, SeekDistance, Workload};
