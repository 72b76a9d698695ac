use crate::Ball;
use crate::cards::CardId;

/// Result of a successful call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Call {
    pub ball: Ball,
    /// cards that reached the threshold on this call, in batch order
    pub newly_won: Vec<CardId>,
}

/// Result of a successful undo.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Undo {
    pub ball: Ball,
    /// cards that dropped back below the threshold, in batch order
    pub reverted: Vec<CardId>,
}
