//! Elevator-style policies: SCAN, LOOK, C-SCAN and C-LOOK.
//!
//! All four split the queue around the head, service the requests ahead of
//! the head in travel order, then turn. They differ only in how they turn
//! (reverse vs. wrap to the opposite edge) and whether the arm runs out to
//! the disk boundary first.

use super::policy::Direction;
use super::workload::{Cylinder, PolicyResult, SeekPath, Workload};

/// What the arm does once the requests ahead of it are exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Reverse and service the remaining requests nearest-first
    Reverse,
    /// Jump to the far side and keep moving in the same direction
    Wrap,
}

/// Parameterized sweep over a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    direction: Direction,
    turn: Turn,
    to_boundary: bool,
}

impl Sweep {
    /// Create a new sweep
    pub fn new(direction: Direction, turn: Turn, to_boundary: bool) -> Self {
        Self {
            direction,
            turn,
            to_boundary,
        }
    }

    /// SCAN in the given direction
    pub fn scan(direction: Direction) -> Self {
        Self::new(direction, Turn::Reverse, true)
    }

    /// LOOK in the given direction
    pub fn look(direction: Direction) -> Self {
        Self::new(direction, Turn::Reverse, false)
    }

    /// C-SCAN, always toward higher cylinders
    pub fn c_scan() -> Self {
        Self::new(Direction::Higher, Turn::Wrap, true)
    }

    /// C-LOOK, always toward higher cylinders
    pub fn c_look() -> Self {
        Self::new(Direction::Higher, Turn::Wrap, false)
    }

    /// Get travel direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get turn behavior
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Whether the arm runs to the disk edge before turning
    pub fn to_boundary(&self) -> bool {
        self.to_boundary
    }

    /// Run the sweep. An empty queue yields an empty result with no
    /// boundary stops.
    pub fn run(&self, workload: &Workload) -> PolicyResult {
        if workload.is_empty() {
            return PolicyResult::empty();
        }

        let (lower, upper) = workload.partition();
        let last = workload.last_cylinder();

        // `ahead` is in travel order, `behind` nearest-first from the head.
        let (ahead, mut behind, edge, opposite_edge): (Vec<Cylinder>, Vec<Cylinder>, _, _) =
            match self.direction {
                Direction::Higher => (upper, lower.into_iter().rev().collect(), last, 0),
                Direction::Lower => (lower.into_iter().rev().collect(), upper, 0, last),
            };

        // Room for every request plus two boundary stops.
        let mut path = SeekPath::starting_at(workload.head(), workload.requests().len() + 2);
        path.visit_all(ahead);

        if self.to_boundary && path.current() != edge {
            path.visit(edge);
        }

        if self.turn == Turn::Wrap {
            if self.to_boundary {
                path.visit(opposite_edge);
            }
            behind.reverse();
        }

        path.visit_all(behind);
        path.finish()
    }
}

/// SCAN: sweep to the boundary in `direction`, then reverse.
pub fn scan(workload: &Workload, direction: Direction) -> PolicyResult {
    Sweep::scan(direction).run(workload)
}

/// LOOK: sweep to the last request in `direction`, then reverse.
pub fn look(workload: &Workload, direction: Direction) -> PolicyResult {
    Sweep::look(direction).run(workload)
}

/// C-SCAN: sweep up to the last cylinder, wrap to cylinder 0 (charged as a
/// full-extent seek) and continue upward.
pub fn c_scan(workload: &Workload) -> PolicyResult {
    Sweep::c_scan().run(workload)
}

/// C-LOOK: sweep up to the highest request, jump to the lowest pending
/// request and continue upward.
pub fn c_look(workload: &Workload) -> PolicyResult {
    Sweep::c_look().run(workload)
}
