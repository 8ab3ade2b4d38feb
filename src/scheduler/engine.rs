use super::{c_look, c_scan, fcfs, look, scan, sstf, Algorithm, Direction, PolicyResult, Workload};
use tracing::debug;

/// Run `algorithm` over `workload`.
///
/// `direction` only affects SCAN and LOOK; the other policies ignore it.
pub fn schedule(algorithm: Algorithm, workload: &Workload, direction: Direction) -> PolicyResult {
    let result = match algorithm {
        Algorithm::Fcfs => fcfs(workload),
        Algorithm::Sstf => sstf(workload),
        Algorithm::Scan => scan(workload, direction),
        Algorithm::CScan => c_scan(workload),
        Algorithm::CLook => c_look(workload),
        Algorithm::Look => look(workload, direction),
    };

    debug!(
        %algorithm,
        %direction,
        requests = workload.requests().len(),
        head = workload.head(),
        total_seek = result.total_seek(),
        "scheduled workload"
    );

    result
}

/// Stateless front door to the policies
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEngine;

impl PolicyEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Run one policy
    pub fn run(
        &self,
        algorithm: Algorithm,
        workload: &Workload,
        direction: Direction,
    ) -> PolicyResult {
        schedule(algorithm, workload, direction)
    }

    /// Run one policy, picking the cheaper direction where it matters.
    /// Direction ties keep `Direction::Higher`.
    pub fn run_best(
        &self,
        algorithm: Algorithm,
        workload: &Workload,
    ) -> (PolicyResult, Option<Direction>) {
        if !algorithm.uses_direction() {
            return (schedule(algorithm, workload, Direction::default()), None);
        }

        let higher = schedule(algorithm, workload, Direction::Higher);
        let lower = schedule(algorithm, workload, Direction::Lower);
        if lower.total_seek() < higher.total_seek() {
            (lower, Some(Direction::Lower))
        } else {
            (higher, Some(Direction::Higher))
        }
    }
}
