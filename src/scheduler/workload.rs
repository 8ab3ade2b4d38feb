use serde::{Deserialize, Serialize};

/// Cylinder index on the disk
pub type Cylinder = u64;

/// Accumulated head movement, in cylinders
pub type SeekDistance = u64;

/// Pending requests plus the head and disk geometry they are scheduled against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    requests: Vec<Cylinder>,
    head: Cylinder,
    cylinders: u64,
}

impl Workload {
    /// Create a new workload
    pub fn new(requests: Vec<Cylinder>, head: Cylinder, cylinders: u64) -> Self {
        Self {
            requests,
            head,
            cylinders,
        }
    }

    /// Get pending requests in arrival order
    pub fn requests(&self) -> &[Cylinder] {
        &self.requests
    }

    /// Get head position
    pub fn head(&self) -> Cylinder {
        self.head
    }

    /// Get disk extent
    pub fn cylinders(&self) -> u64 {
        self.cylinders
    }

    /// Highest addressable cylinder
    pub fn last_cylinder(&self) -> Cylinder {
        self.cylinders.saturating_sub(1)
    }

    /// Check if there is nothing to schedule
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Split requests around the head, both halves sorted ascending.
    /// A request on the head's own cylinder belongs to the upper half.
    pub fn partition(&self) -> (Vec<Cylinder>, Vec<Cylinder>) {
        let (mut lower, mut upper): (Vec<Cylinder>, Vec<Cylinder>) =
            self.requests.iter().partition(|&&r| r < self.head);
        lower.sort_unstable();
        upper.sort_unstable();
        (lower, upper)
    }
}

/// Visit order and cost produced by one policy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyResult {
    sequence: Vec<Cylinder>,
    total_seek: SeekDistance,
}

impl PolicyResult {
    /// Result of scheduling nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cylinders in visit order, excluding the starting head position
    pub fn sequence(&self) -> &[Cylinder] {
        &self.sequence
    }

    /// Total head movement
    pub fn total_seek(&self) -> SeekDistance {
        self.total_seek
    }

    /// Consume into the visit sequence
    pub fn into_sequence(self) -> Vec<Cylinder> {
        self.sequence
    }
}

/// Head path under construction
pub(crate) struct SeekPath {
    current: Cylinder,
    sequence: Vec<Cylinder>,
    total_seek: SeekDistance,
}

impl SeekPath {
    pub(crate) fn starting_at(head: Cylinder, capacity: usize) -> Self {
        Self {
            current: head,
            sequence: Vec::with_capacity(capacity),
            total_seek: 0,
        }
    }

    pub(crate) fn current(&self) -> Cylinder {
        self.current
    }

    /// Move the head to `cylinder` and record the stop
    pub(crate) fn visit(&mut self, cylinder: Cylinder) {
        self.total_seek = self
            .total_seek
            .saturating_add(self.current.abs_diff(cylinder));
        self.current = cylinder;
        self.sequence.push(cylinder);
    }

    pub(crate) fn visit_all<I>(&mut self, cylinders: I)
    where
        I: IntoIterator<Item = Cylinder>,
    {
        for cylinder in cylinders {
            self.visit(cylinder);
        }
    }

    pub(crate) fn finish(self) -> PolicyResult {
        PolicyResult {
            sequence: self.sequence,
            total_seek: self.total_seek,
        }
    }
}

/// Re-compute the head movement along `head` followed by `sequence`
pub fn path_length(head: Cylinder, sequence: &[Cylinder]) -> SeekDistance {
    sequence
        .iter()
        .fold((head, 0u64), |(current, total), &next| {
            (next, total.saturating_add(current.abs_diff(next)))
        })
        .1
}
