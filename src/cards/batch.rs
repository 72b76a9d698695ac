use super::bingo::Bingo;
use super::card::Card;
use super::card::CardId;
use super::layout::Layout;
use super::layout::Row;
use crate::Ball;
use crate::BingoId;

/// The full set of bingos produced by one generation run, in bingo order.
/// Cards are addressed by their position in [`Batch::cards`], which is the
/// (bingo, slot) order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Batch {
    seed: u64,
    spots: usize,
    balls: Ball,
    bingos: Vec<Bingo>,
}

impl Batch {
    /// Also the entry point for batches loaded from an archive: nothing is
    /// checked here, that is the auditor's job.
    pub fn new(seed: u64, spots: usize, balls: Ball, bingos: Vec<Bingo>) -> Self {
        Self {
            seed,
            spots,
            balls,
            bingos,
        }
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// numbers per card (k)
    pub fn spots(&self) -> usize {
        self.spots
    }
    /// size of the ball pool (N)
    pub fn balls(&self) -> Ball {
        self.balls
    }
    pub fn bingos(&self) -> &[Bingo] {
        &self.bingos
    }
    pub fn bingo(&self, id: BingoId) -> Option<&Bingo> {
        self.bingos.iter().find(|b| b.id() == id)
    }
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.bingos.iter().flat_map(|b| b.cards().iter())
    }
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.bingo(id.bingo)
            .and_then(|b| b.cards().iter().find(|c| c.slot() == id.slot))
    }
    pub fn len(&self) -> usize {
        self.bingos.iter().map(|b| b.cards().len()).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn layout(&self) -> Layout {
        Layout::new(self.bingos.len(), crate::BINGOS_PER_ROW)
    }
    /// Paired export rows: bingo `i` beside bingo `M/2 + i`.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let half = self.bingos.len() / 2;
        let (left, right) = self.bingos.split_at(half);
        left.iter()
            .zip(right.iter())
            .map(|(left, right)| Row { left, right })
    }
}

impl std::fmt::Display for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for bingo in self.bingos.iter() {
            write!(f, "{}", bingo)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Slot;

    fn sample() -> Batch {
        let bingos = (1..=4u16)
            .map(|id| {
                let right = id > 2;
                let cards = (0..3)
                    .map(|p| {
                        let base = (id as u8 - 1) * 3 + p as u8;
                        Card::new(CardId::new(id, Slot::of(right, p)), vec![base + 1])
                    })
                    .collect();
                Bingo::new(id, cards)
            })
            .collect();
        Batch::new(1, 1, 60, bingos)
    }

    #[test]
    fn cards_in_identity_order() {
        let batch = sample();
        let ids = batch.cards().map(|c| c.id()).collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(batch.len(), 12);
    }

    #[test]
    fn paired_rows() {
        let batch = sample();
        let rows = batch.rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].left.id(), 1);
        assert_eq!(rows[0].right.id(), 3);
        assert_eq!(rows[1].left.id(), 2);
        assert_eq!(rows[1].right.id(), 4);
        let slots = rows[0].cards().map(|c| c.slot()).collect::<Vec<_>>();
        assert_eq!(slots, Slot::all().to_vec());
        assert!(rows[0].to_string().starts_with("0001-A 01 | 0003-D 07\n"));
    }

    #[test]
    fn lookup() {
        let batch = sample();
        let card = batch.card(CardId::new(3, Slot::E)).unwrap();
        assert_eq!(card.balls(), &[8]);
        assert!(batch.card(CardId::new(3, Slot::A)).is_none());
        assert!(batch.bingo(5).is_none());
    }
}
