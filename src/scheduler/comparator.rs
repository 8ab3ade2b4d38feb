use super::{Algorithm, Direction, PolicyEngine, PolicyResult, SeekDistance, Workload};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

/// Per-algorithm total seek distance, kept in comparison order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CostTable {
    entries: Vec<(Algorithm, SeekDistance)>,
}

impl CostTable {
    /// Cost recorded for `algorithm`
    pub fn get(&self, algorithm: Algorithm) -> Option<SeekDistance> {
        self.entries
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, cost)| *cost)
    }

    /// Lowest recorded cost
    pub fn min(&self) -> Option<SeekDistance> {
        self.entries.iter().map(|(_, cost)| *cost).min()
    }

    /// Iterate entries in comparison order
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, SeekDistance)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CostTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (algorithm, cost) in &self.entries {
            map.serialize_entry(algorithm.name(), cost)?;
        }
        map.end()
    }
}

/// Outcome of running every policy over one workload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    optimal: Algorithm,
    direction: Option<Direction>,
    result: PolicyResult,
    costs: CostTable,
}

impl ComparisonResult {
    /// Cheapest algorithm
    pub fn optimal(&self) -> Algorithm {
        self.optimal
    }

    /// Direction the winner was evaluated with, for SCAN and LOOK
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Winner's schedule
    pub fn result(&self) -> &PolicyResult {
        &self.result
    }

    /// Winner's total seek distance
    pub fn seek_time(&self) -> SeekDistance {
        self.result.total_seek()
    }

    /// Every algorithm's cost
    pub fn costs(&self) -> &CostTable {
        &self.costs
    }
}

/// Evaluate all policies on `workload` and pick the cheapest.
///
/// SCAN and LOOK are scored by their better direction. Cost ties go to the
/// algorithm listed first in [`Algorithm::ALL`].
pub fn compare(workload: &Workload) -> ComparisonResult {
    let engine = PolicyEngine::new();
    let mut costs = Vec::with_capacity(Algorithm::ALL.len());

    let mut optimal = Algorithm::ALL[0];
    let (mut result, mut direction) = engine.run_best(optimal, workload);
    costs.push((optimal, result.total_seek()));

    for algorithm in Algorithm::ALL.into_iter().skip(1) {
        let (candidate, candidate_direction) = engine.run_best(algorithm, workload);
        costs.push((algorithm, candidate.total_seek()));

        if candidate.total_seek() < result.total_seek() {
            optimal = algorithm;
            direction = candidate_direction;
            result = candidate;
        }
    }

    debug!(
        %optimal,
        seek_time = result.total_seek(),
        "compared policies"
    );

    ComparisonResult {
        optimal,
        direction,
        result,
        costs: CostTable { entries: costs },
    }
}
