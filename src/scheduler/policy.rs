use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Disk scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First come, first served
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest seek time first
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator sweep to the disk boundary
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN
    #[serde(rename = "C-SCAN")]
    CScan,
    /// Circular LOOK
    #[serde(rename = "C-LOOK")]
    CLook,
    /// Elevator sweep reversing at the last request
    #[serde(rename = "LOOK")]
    Look,
}

impl Algorithm {
    /// All algorithms in comparison order. Earlier entries win cost ties.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
        Algorithm::CLook,
        Algorithm::Look,
    ];

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
            Algorithm::CLook => "C-LOOK",
            Algorithm::Look => "LOOK",
        }
    }

    /// Whether the scan direction changes the result
    pub fn uses_direction(&self) -> bool {
        matches!(self, Algorithm::Scan | Algorithm::Look)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| SchedulerError::InvalidAlgorithm(s.to_string()))
    }
}

/// Initial sweep direction of the head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Toward cylinder 0
    #[serde(rename = "left")]
    Lower,
    /// Toward the last cylinder
    #[serde(rename = "right")]
    #[default]
    Higher,
}

impl Direction {
    /// Wire name
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Lower => "left",
            Direction::Higher => "right",
        }
    }

    /// The other direction
    pub fn reversed(&self) -> Self {
        match self {
            Direction::Lower => Direction::Higher,
            Direction::Higher => Direction::Lower,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Lower),
            "right" => Ok(Direction::Higher),
            other => Err(SchedulerError::MalformedInput(format!(
                "direction must be 'left' or 'right', got '{}'",
                other
            ))),
        }
    }
}
