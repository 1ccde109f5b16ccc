// Fractal Sketch progress readout
//
// Value emitted after every barrier clears. Formatting for display is the
// host's concern; `Display` renders the conventional "Total: N" label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of a run a progress update belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The base outline drawn before round 0
    Backdrop,
    /// A numbered generation round
    Round(usize),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Backdrop => write!(f, "backdrop"),
            Phase::Round(k) => write!(f, "round {}", k),
        }
    }
}

/// Cumulative shape count after a phase completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub phase: Phase,
    /// Shapes drawn during this phase
    pub drawn: usize,
    /// Shapes drawn since the run started (monotonically increasing)
    pub total: u64,
}

impl Progress {
    pub fn new(phase: Phase, drawn: usize, total: u64) -> Self {
        Self {
            phase,
            drawn,
            total,
        }
    }

    /// Progress for the backdrop, which is always a single shape
    pub fn backdrop() -> Self {
        Self::new(Phase::Backdrop, 1, 1)
    }

    /// Progress after `round` cleared, given the total before it
    pub fn after_round(round: usize, drawn: usize, previous_total: u64) -> Self {
        Self::new(Phase::Round(round), drawn, previous_total + drawn as u64)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total: {}", self.total)
    }
}
