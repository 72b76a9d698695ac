use crate::Ball;
use crate::cards::CardId;
use crate::session::Board;
use crate::session::Session;
use std::sync::Arc;

/// How a simulated session ended.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    /// at least one card reached the threshold on call number `calls`
    Won { calls: usize, winners: Vec<CardId> },
    /// every ball was called and nobody won
    Exhausted { calls: usize },
}

/// One simulated session: replays a draw sequence until the first win.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Trial {
    pub index: usize,
    pub outcome: Outcome,
    /// balls called, in order, up to and including the winning call
    pub order: Vec<Ball>,
}

impl Trial {
    /// Rejected calls are logged and left out of `order`.
    pub fn play<I>(index: usize, board: Arc<Board>, draws: I) -> Self
    where
        I: IntoIterator<Item = Ball>,
    {
        let ref mut session = Session::from(board);
        let mut order = Vec::new();
        for ball in draws {
            let winners = match session.call(ball) {
                Ok(call) => call.newly_won,
                Err(e) => {
                    log::warn!("{:<32}{:<16}{}", "trial rejected call", index, e);
                    continue;
                }
            };
            order.push(ball);
            if !winners.is_empty() {
                let calls = order.len();
                return Self {
                    index,
                    outcome: Outcome::Won { calls, winners },
                    order,
                };
            }
        }
        log::debug!("{:<32}{:<16}", "trial exhausted", index);
        Self {
            index,
            outcome: Outcome::Exhausted { calls: order.len() },
            order,
        }
    }

    pub fn calls(&self) -> usize {
        match self.outcome {
            Outcome::Won { calls, .. } => calls,
            Outcome::Exhausted { calls } => calls,
        }
    }
    pub fn winners(&self) -> &[CardId] {
        match self.outcome {
            Outcome::Won { ref winners, .. } => winners,
            Outcome::Exhausted { .. } => &[],
        }
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self.outcome, Outcome::Exhausted { .. })
    }
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let winners = self
            .winners()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>();
        write!(
            f,
            "{:>4} {:>3} calls  {}",
            self.index + 1,
            self.calls(),
            match self.is_exhausted() {
                true => "no winner".to_string(),
                false => winners.join(", "),
            }
        )
    }
}
