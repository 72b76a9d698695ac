use crate::Ball;
use rand::Rng;
use rand::seq::SliceRandom;

/// Order in which balls leave the drum for one session:
/// a uniform random permutation of 1..=N.
/// A prefix of length t is the set of balls called after t calls.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Sequence(Vec<Ball>);

impl Sequence {
    pub fn new<R>(rng: &mut R, balls: Ball) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut order = (1..=balls).collect::<Vec<Ball>>();
        order.shuffle(rng);
        Self(order)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn prefix(&self, t: usize) -> &[Ball] {
        &self.0[..t.min(self.0.len())]
    }
    pub fn iter(&self) -> impl Iterator<Item = Ball> + '_ {
        self.0.iter().copied()
    }
}

impl From<Sequence> for Vec<Ball> {
    fn from(sequence: Sequence) -> Self {
        sequence.0
    }
}

impl IntoIterator for Sequence {
    type Item = Ball;
    type IntoIter = std::vec::IntoIter<Ball>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
