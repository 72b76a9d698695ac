use crate::Ball;
use crate::cards::CardId;

/// A card as seen mid-session: its numbers and which of them were called.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Detail {
    pub card: CardId,
    pub balls: Vec<Ball>,
    pub hit: Vec<Ball>,
    pub hits: usize,
    pub winner: bool,
}

/// called numbers are bracketed
impl std::fmt::Display for Detail {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ", self.card)?;
        for ball in self.balls.iter() {
            match self.hit.contains(ball) {
                true => write!(f, " [{:02}]", ball)?,
                false => write!(f, "  {:02} ", ball)?,
            }
        }
        write!(f, "  {} hits{}", self.hits, if self.winner { " BINGO" } else { "" })
    }
}
