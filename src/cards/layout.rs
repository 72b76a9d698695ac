use super::bingo::Bingo;
use super::card::Card;
use crate::BingoId;
use std::ops::RangeInclusive;

/// Numbering arithmetic of the paired export layout.
///
/// Bingos 1..=M/2 fill the left column of each row and M/2+1..=M the right,
/// so row `r` pairs bingo `r + 1` with bingo `M/2 + r + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Layout {
    bingos: usize,
    per_row: usize,
}

impl Layout {
    pub fn new(bingos: usize, per_row: usize) -> Self {
        Self { bingos, per_row }
    }
    pub fn bingos(&self) -> usize {
        self.bingos
    }
    pub fn rows(&self) -> usize {
        self.bingos / self.per_row.max(1)
    }
    pub fn half(&self) -> usize {
        self.bingos / 2
    }
    /// numbering of the left column
    pub fn first(&self) -> RangeInclusive<BingoId> {
        1..=self.half() as BingoId
    }
    /// numbering of the right column
    pub fn second(&self) -> RangeInclusive<BingoId> {
        self.half() as BingoId + 1..=self.bingos as BingoId
    }
    /// whether bingo `id` is printed in the right column
    pub fn is_right(&self, id: BingoId) -> bool {
        id as usize > self.half()
    }
}

/// "left 0001 - 0600 | right 0601 - 1200"
impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "left {:04} - {:04} | right {:04} - {:04}",
            self.first().start(),
            self.first().end(),
            self.second().start(),
            self.second().end()
        )
    }
}

/// One row of the paired export: two bingos side by side.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub left: &'a Bingo,
    pub right: &'a Bingo,
}

impl<'a> Row<'a> {
    /// cards in column order: left A, B, C then right D, E, F
    pub fn cards(&self) -> impl Iterator<Item = &'a Card> {
        self.left.cards().iter().chain(self.right.cards().iter())
    }
}

/// left and right cards side by side, one slot position per line
impl std::fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (left, right) in self.left.cards().iter().zip(self.right.cards()) {
            writeln!(f, "{} | {}", left, right)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_ranges() {
        let layout = Layout::new(1200, 2);
        assert_eq!(layout.rows(), 600);
        assert_eq!(layout.first(), 1..=600);
        assert_eq!(layout.second(), 601..=1200);
        assert!(!layout.is_right(600));
        assert!(layout.is_right(601));
        assert_eq!(layout.to_string(), "left 0001 - 0600 | right 0601 - 1200");
    }
}
