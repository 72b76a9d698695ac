use crate::Ball;
use crate::BingoId;
use crate::Result;
use crate::audit::Auditor;
use crate::cards::Batch;
use crate::cards::Card;
use crate::cards::CardId;
use crate::generation::Config;

/// An audited batch laid out for play.
///
/// Cards are indexed by their position in batch order, which is ascending
/// [`CardId`] order. `holders[ball]` lists the cards printing that ball, so a
/// call touches only the cards it hits.
#[derive(Debug, Clone)]
pub struct Board {
    batch: Batch,
    cards: Vec<Card>,
    holders: Vec<Vec<usize>>,
    threshold: usize,
}

impl Board {
    /// Refuses any batch that does not pass the audit for `config`.
    pub fn new(batch: Batch, config: &Config) -> Result<Self> {
        Auditor::from(*config).audit(&batch).ensure()?;
        let cards = batch.cards().cloned().collect::<Vec<Card>>();
        let mut holders = vec![Vec::new(); batch.balls() as usize + 1];
        for (i, card) in cards.iter().enumerate() {
            for &ball in card.balls() {
                holders[ball as usize].push(i);
            }
        }
        Ok(Self {
            batch,
            cards,
            holders,
            threshold: crate::WIN_THRESHOLD,
        })
    }

    /// Hits needed to win; defaults to [`crate::WIN_THRESHOLD`].
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }
    pub fn threshold(&self) -> usize {
        self.threshold
    }
    pub fn balls(&self) -> Ball {
        self.batch.balls()
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index]
    }
    /// cards printing `ball`, in batch order
    pub fn holders(&self, ball: Ball) -> &[usize] {
        self.holders
            .get(ball as usize)
            .map(|h| h.as_slice())
            .unwrap_or(&[])
    }
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.binary_search_by_key(&id, |c| c.id()).ok()
    }
    /// positions of every card printed on bingo `id`
    pub fn bingo(&self, id: BingoId) -> impl Iterator<Item = usize> + '_ {
        let start = self.cards.partition_point(|c| c.bingo() < id);
        (start..self.cards.len()).take_while(move |&i| self.cards[i].bingo() == id)
    }
}
