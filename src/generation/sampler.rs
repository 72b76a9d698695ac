use crate::Ball;
use crate::Error;
use crate::Result;
use rand::Rng;

/// Draws one card: `spots` distinct balls, uniform over 1..=`balls`,
/// independent of every other card. Output is sorted ascending.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    spots: usize,
    balls: Ball,
}

impl Sampler {
    pub fn new(spots: usize, balls: Ball) -> Result<Self> {
        if spots > balls as usize {
            Err(Error::Range { spots, balls })
        } else {
            Ok(Self { spots, balls })
        }
    }

    pub fn sample<R>(&self, rng: &mut R) -> Vec<Ball>
    where
        R: Rng + ?Sized,
    {
        let mut balls = rand::seq::index::sample(rng, self.balls as usize, self.spots)
            .into_iter()
            .map(|i| i as Ball + 1)
            .collect::<Vec<Ball>>();
        balls.sort_unstable();
        balls
    }
}
