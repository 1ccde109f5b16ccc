use std::fmt;

/// Lifecycle of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    /// Drawing (or about to draw) round `k`
    Round(usize),
    Done,
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverState::Idle => write!(f, "idle"),
            DriverState::Round(k) => write!(f, "round {}", k),
            DriverState::Done => write!(f, "done"),
        }
    }
}
