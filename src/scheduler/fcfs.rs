use super::workload::{PolicyResult, SeekPath, Workload};

/// First come, first served: requests are visited in arrival order.
pub fn fcfs(workload: &Workload) -> PolicyResult {
    let mut path = SeekPath::starting_at(workload.head(), workload.requests().len());
    path.visit_all(workload.requests().iter().copied());
    path.finish()
}
