use super::board::Board;
use super::detail::Detail;
use super::outcome::Call;
use super::outcome::Undo;
use super::phase::Phase;
use super::ranking::Standing;
use crate::Ball;
use crate::BingoId;
use crate::Error;
use crate::Result;
use crate::cards::Card;
use crate::cards::CardId;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Mutable state of one sequence of calls against a board.
///
/// Every transition is all-or-nothing: a rejected call or undo leaves
/// calls, hits and winners exactly as they were.
#[derive(Debug, Clone)]
pub struct Session {
    board: Arc<Board>,
    calls: Vec<Ball>,
    called: Vec<bool>,
    hits: Vec<usize>,
    winners: BTreeSet<usize>,
}

impl From<Arc<Board>> for Session {
    fn from(board: Arc<Board>) -> Self {
        Self {
            calls: Vec::new(),
            called: vec![false; board.balls() as usize + 1],
            hits: vec![0; board.len()],
            winners: BTreeSet::new(),
            board,
        }
    }
}

impl Session {
    /// Marks `ball` on every card printing it. Cards whose count reaches the
    /// threshold on this call are reported together.
    pub fn call(&mut self, ball: Ball) -> Result<Call> {
        if ball == 0 || ball > self.board.balls() {
            return Err(Error::OutOfPool {
                ball,
                balls: self.board.balls(),
            });
        }
        if self.called[ball as usize] {
            return Err(Error::AlreadyCalled(ball));
        }
        self.calls.push(ball);
        self.called[ball as usize] = true;
        let threshold = self.board.threshold();
        let mut newly_won = Vec::new();
        for &i in self.board.holders(ball) {
            self.hits[i] += 1;
            if self.hits[i] == threshold {
                self.winners.insert(i);
                newly_won.push(self.board.card(i).id());
            }
        }
        log::debug!("{:<32}{:<16}{:<16}", "called", ball, self.calls.len());
        for card in newly_won.iter() {
            log::info!("{:<32}{:<16}{:<16}", "bingo", card, self.calls.len());
        }
        Ok(Call { ball, newly_won })
    }

    /// Takes back the most recent call, un-winning any card it completed.
    pub fn undo(&mut self) -> Result<Undo> {
        let ball = self.calls.pop().ok_or(Error::NothingToUndo)?;
        self.called[ball as usize] = false;
        let threshold = self.board.threshold();
        let mut reverted = Vec::new();
        for &i in self.board.holders(ball) {
            if self.hits[i] == threshold {
                self.winners.remove(&i);
                reverted.push(self.board.card(i).id());
            }
            self.hits[i] -= 1;
        }
        log::debug!("{:<32}{:<16}{:<16}", "undone", ball, self.calls.len());
        Ok(Undo { ball, reverted })
    }

    /// Back to the configured state, same board.
    pub fn reset(&mut self) {
        self.calls.clear();
        self.called.fill(false);
        self.hits.fill(0);
        self.winners.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn phase(&self) -> Phase {
        match self.calls.is_empty() {
            true => Phase::Configured,
            false => Phase::InProgress,
        }
    }
    pub fn has_winners(&self) -> bool {
        !self.winners.is_empty()
    }
    pub fn calls(&self) -> &[Ball] {
        &self.calls
    }
    pub fn last_call(&self) -> Option<Ball> {
        self.calls.last().copied()
    }
    pub fn is_called(&self, ball: Ball) -> bool {
        self.called.get(ball as usize).copied().unwrap_or(false)
    }
    /// balls still in the drum, ascending
    pub fn available(&self) -> Vec<Ball> {
        (1..=self.board.balls())
            .filter(|&b| !self.is_called(b))
            .collect()
    }
    /// hit count of the card at `index`
    pub fn hits(&self, index: usize) -> usize {
        self.hits[index]
    }
    pub fn winners(&self) -> impl Iterator<Item = &Card> {
        self.winners.iter().map(|&i| self.board.card(i))
    }

    /// Top `n` cards by hits, computed fresh from the current counts.
    pub fn ranking(&self, n: usize) -> Vec<Standing> {
        super::ranking::top(&self.hits, n)
            .into_iter()
            .map(|i| self.standing(i))
            .collect()
    }

    pub fn card(&self, id: CardId) -> Option<Detail> {
        self.board.position(id).map(|i| self.detail(i))
    }
    /// every card of physical bingo `id`
    pub fn bingo(&self, id: BingoId) -> Result<Vec<Detail>> {
        let details = self
            .board
            .bingo(id)
            .map(|i| self.detail(i))
            .collect::<Vec<Detail>>();
        match details.is_empty() {
            true => Err(Error::UnknownBingo(id)),
            false => Ok(details),
        }
    }
    pub fn winners_detail(&self) -> Vec<Detail> {
        self.winners.iter().map(|&i| self.detail(i)).collect()
    }

    fn standing(&self, i: usize) -> Standing {
        Standing {
            card: self.board.card(i).id(),
            hits: self.hits[i],
            winner: self.winners.contains(&i),
        }
    }
    fn detail(&self, i: usize) -> Detail {
        let card = self.board.card(i);
        Detail {
            card: card.id(),
            balls: card.balls().to_vec(),
            hit: card
                .balls()
                .iter()
                .copied()
                .filter(|&b| self.is_called(b))
                .collect(),
            hits: self.hits[i],
            winner: self.winners.contains(&i),
        }
    }
}
