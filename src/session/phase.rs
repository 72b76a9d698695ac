/// Lifecycle of a session. Having winners is tracked separately: calling
/// goes on after a win, and undo can take the win back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// bound to a board, nothing called yet (also the state after reset)
    Configured,
    /// at least one ball called
    InProgress,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Configured => write!(f, "configured"),
            Self::InProgress => write!(f, "in progress"),
        }
    }
}
