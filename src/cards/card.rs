use super::signature::Signature;
use super::slot::Slot;
use crate::Ball;
use crate::BingoId;

/// Identity of a card: the physical bingo it is printed on and its slot.
/// Ordered by bingo then slot, which is also the batch order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardId {
    pub bingo: BingoId,
    pub slot: Slot,
}

impl CardId {
    pub fn new(bingo: BingoId, slot: Slot) -> Self {
        Self { bingo, slot }
    }
}

/// "0042-E"
impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{}", self.bingo, self.slot)
    }
}
impl TryFrom<&str> for CardId {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (bingo, slot) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("invalid card id: {}", s))?;
        let bingo = bingo
            .parse::<BingoId>()
            .map_err(|e| format!("invalid card id: {}", e))?;
        let slot = Slot::try_from(slot)?;
        Ok(Self::new(bingo, slot))
    }
}
impl serde::Serialize for CardId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One player-facing set of numbers. Immutable once built.
/// Numbers keep their printing order; comparisons go through [`Signature`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Card {
    id: CardId,
    balls: Vec<Ball>,
}

impl Card {
    pub fn new(id: CardId, balls: Vec<Ball>) -> Self {
        Self { id, balls }
    }
    pub fn id(&self) -> CardId {
        self.id
    }
    pub fn bingo(&self) -> BingoId {
        self.id.bingo
    }
    pub fn slot(&self) -> Slot {
        self.id.slot
    }
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }
    pub fn size(&self) -> usize {
        self.balls.len()
    }
    pub fn contains(&self, ball: Ball) -> bool {
        self.balls.contains(&ball)
    }
    pub fn signature(&self) -> Signature {
        Signature::from(self.balls())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_order() {
        let a = CardId::new(1, Slot::C);
        let b = CardId::new(2, Slot::A);
        let c = CardId::new(2, Slot::B);
        assert!(a < b && b < c);
    }

    #[test]
    fn bijective_str() {
        let id = CardId::new(42, Slot::E);
        assert_eq!(id.to_string(), "0042-E");
        assert_eq!(CardId::try_from("0042-E"), Ok(id));
        assert_eq!(CardId::try_from("42-e"), Ok(id));
        assert!(CardId::try_from("0042").is_err());
    }

    #[test]
    fn membership() {
        let card = Card::new(CardId::new(1, Slot::A), vec![12, 3, 7]);
        assert!(card.contains(7));
        assert!(!card.contains(8));
        assert_eq!(card.size(), 3);
        assert_eq!(card.to_string(), "0001-A 03 07 12");
    }
}
