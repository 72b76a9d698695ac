use super::config::Config;
use super::registry::Registry;
use super::sampler::Sampler;
use crate::Ball;
use crate::BingoId;
use crate::Error;
use crate::Result;
use crate::cards::Batch;
use crate::cards::Bingo;
use crate::cards::Card;
use crate::cards::CardId;
use crate::cards::Signature;
use crate::cards::Slot;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelRefMutIterator;
use rayon::iter::ParallelIterator;
use std::ops::Range;

/// Builds a batch of pairwise-unique cards by rejection sampling.
///
/// Card slots are split into contiguous lanes, one per worker, each with its
/// own generator derived from the master seed. Every round the lanes draw a
/// candidate for each of their empty slots in parallel; candidates are then
/// registered in slot order, so the outcome depends only on the seed and the
/// worker count.
pub struct Generator {
    config: Config,
}

/// A worker's share of the card slots.
struct Lane {
    rng: SmallRng,
    slots: Range<usize>,
}

impl Lane {
    fn draw(&mut self, sampler: &Sampler, filled: &[Option<Vec<Ball>>]) -> Vec<(usize, Vec<Ball>)> {
        let ref mut rng = self.rng;
        self.slots
            .clone()
            .filter(|&i| filled[i].is_none())
            .map(|i| (i, sampler.sample(rng)))
            .collect()
    }
}

impl From<Config> for Generator {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

impl Generator {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generate(&self) -> Result<Batch> {
        self.config.validate()?;
        let sampler = Sampler::new(self.config.spots, self.config.balls)?;
        let total = self.config.cards();
        let registry = Registry::default();
        let mut lanes = self.lanes(total);
        let mut filled = vec![None; total];
        let mut attempts = vec![0usize; total];
        let mut rejected = 0usize;
        log::info!(
            "{:<32}{:<16}{:<32}",
            "generating cards",
            total,
            format!("seed {}", self.config.seed)
        );
        while registry.len() < total {
            let candidates = lanes
                .par_iter_mut()
                .map(|lane| lane.draw(&sampler, &filled))
                .collect::<Vec<Vec<(usize, Vec<Ball>)>>>();
            for (slot, balls) in candidates.into_iter().flatten() {
                attempts[slot] += 1;
                if registry.register(Signature::from(balls.as_slice())) {
                    filled[slot] = Some(balls);
                    if registry.len() % crate::PROGRESS_INTERVAL == 0 {
                        log::debug!("{:<32}{:<16}", "registered cards", registry.len());
                    }
                } else if attempts[slot] >= self.config.retries {
                    return Err(Error::Exhausted {
                        slot,
                        attempts: attempts[slot],
                    });
                } else {
                    rejected += 1;
                }
            }
        }
        log::debug!("{:<32}{:<16}", "rejected duplicates", rejected);
        log::info!("{:<32}{:<16}", "generated cards", total);
        Ok(self.assemble(filled.into_iter().flatten().collect()))
    }

    fn lanes(&self, total: usize) -> Vec<Lane> {
        let workers = self.config.workers.clamp(1, total.max(1));
        let width = total.div_ceil(workers);
        (0..workers)
            .map(|w| Lane {
                rng: crate::seeded(self.config.seed, w),
                slots: (w * width).min(total)..((w + 1) * width).min(total),
            })
            .collect()
    }

    /// slot i belongs to bingo i / cards_per_bingo + 1
    fn assemble(&self, cards: Vec<Vec<Ball>>) -> Batch {
        let layout = self.config.layout();
        let per = self.config.cards_per_bingo;
        let bingos = cards
            .chunks(per)
            .enumerate()
            .map(|(i, chunk)| {
                let id = i as BingoId + 1;
                let right = layout.is_right(id);
                let cards = chunk
                    .iter()
                    .enumerate()
                    .map(|(p, balls)| Card::new(CardId::new(id, Slot::of(right, p)), balls.clone()))
                    .collect();
                Bingo::new(id, cards)
            })
            .collect();
        Batch::new(
            self.config.seed,
            self.config.spots,
            self.config.balls,
            bingos,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn small() -> Config {
        Config {
            bingos: 40,
            ..Config::default()
        }
    }

    #[test]
    fn cards_are_unique_and_well_formed() {
        let batch = Generator::from(small()).generate().unwrap();
        assert_eq!(batch.len(), 120);
        assert_eq!(batch.bingos().len(), 40);
        let signatures = batch.cards().map(|c| c.signature()).collect::<HashSet<_>>();
        assert_eq!(signatures.len(), 120);
        for card in batch.cards() {
            assert_eq!(card.size(), 10);
            assert!(card.balls().iter().all(|&b| (1..=60).contains(&b)));
        }
    }

    #[test]
    fn halves_carry_their_slots() {
        let batch = Generator::from(small()).generate().unwrap();
        for bingo in batch.bingos() {
            let right = bingo.id() > 20;
            assert_eq!(bingo.cards().len(), 3);
            assert!(bingo.cards().iter().all(|c| c.slot().is_right() == right));
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let a = Generator::from(small()).generate().unwrap();
        let b = Generator::from(small()).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn same_seed_same_batch_with_workers() {
        let config = Config {
            workers: 4,
            ..small()
        };
        let a = Generator::from(config).generate().unwrap();
        let b = Generator::from(config).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_batch() {
        let a = Generator::from(small()).generate().unwrap();
        let b = Generator::from(Config { seed: 1, ..small() })
            .generate()
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn saturated_space_is_filled() {
        // C(6,3) = 20 cards, 6 bingos x 3 = 18 of them
        let config = Config {
            bingos: 6,
            spots: 3,
            balls: 6,
            ..Config::default()
        };
        let batch = Generator::from(config).generate().unwrap();
        let signatures = batch.cards().map(|c| c.signature()).collect::<HashSet<_>>();
        assert_eq!(signatures.len(), 18);
    }

    #[test]
    fn tight_retry_bound_exhausts() {
        // C(4,2) = 6 cards exist and 6 are wanted; one attempt per slot
        // cannot dodge every collision
        let config = Config {
            bingos: 2,
            spots: 2,
            balls: 4,
            retries: 1,
            ..Config::default()
        };
        let seeds = (0..32u64)
            .map(|seed| Generator::from(Config { seed, ..config }).generate())
            .filter(|r| matches!(r, Err(Error::Exhausted { .. })))
            .count();
        assert!(seeds > 0);
    }

    #[test]
    fn infeasible_config_fails_fast() {
        let config = Config {
            spots: 70,
            ..small()
        };
        assert!(matches!(
            Generator::from(config).generate(),
            Err(Error::Range { .. })
        ));
    }
}
