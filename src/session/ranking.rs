use crate::cards::CardId;
use std::cmp::Reverse;

/// One line of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Standing {
    pub card: CardId,
    pub hits: usize,
    pub winner: bool,
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {:>2}{}",
            self.card,
            self.hits,
            if self.winner { " BINGO" } else { "" }
        )
    }
}

/// Positions of the `n` cards with most hits.
/// Ties go to the earlier card in batch order (lower bingo, then lower slot),
/// so identical hit counts always rank identically.
pub fn top(hits: &[usize], n: usize) -> Vec<usize> {
    let mut order = (0..hits.len()).collect::<Vec<usize>>();
    let key = |&i: &usize| (Reverse(hits[i]), i);
    if n < order.len() {
        order.select_nth_unstable_by_key(n, key);
        order.truncate(n);
    }
    order.sort_unstable_by_key(key);
    order
}
