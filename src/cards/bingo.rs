use super::card::Card;
use crate::BingoId;

/// A physical bingo: the cards printed together under one number.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Bingo {
    id: BingoId,
    cards: Vec<Card>,
}

impl Bingo {
    pub fn new(id: BingoId, cards: Vec<Card>) -> Self {
        Self { id, cards }
    }
    pub fn id(&self) -> BingoId {
        self.id
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    /// right-half bingos carry D/E/F cards
    pub fn is_right(&self) -> bool {
        self.cards.first().map_or(false, |c| c.slot().is_right())
    }
}

impl std::fmt::Display for Bingo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "BINGO {:04}", self.id)?;
        for card in self.cards.iter() {
            writeln!(f, "  {}", card)?;
        }
        Ok(())
    }
}
