use crate::Ball;
use crate::Error;
use crate::Result;
use crate::cards::Layout;

/// Parameters of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Config {
    pub seed: u64,
    /// physical bingos (M)
    pub bingos: usize,
    /// numbers per card (k)
    pub spots: usize,
    /// size of the ball pool (N)
    pub balls: Ball,
    pub cards_per_bingo: usize,
    pub bingos_per_row: usize,
    /// draw attempts allowed per card slot
    pub retries: usize,
    /// sampling lanes; results are reproducible for a fixed count
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: crate::SEED,
            bingos: crate::BINGOS,
            spots: crate::SPOTS,
            balls: crate::BALLS,
            cards_per_bingo: crate::CARDS_PER_BINGO,
            bingos_per_row: crate::BINGOS_PER_ROW,
            retries: crate::RETRY_LIMIT,
            workers: 1,
        }
    }
}

impl Config {
    /// total cards to generate
    pub fn cards(&self) -> usize {
        self.bingos.saturating_mul(self.cards_per_bingo)
    }
    /// every distinct card that k-of-N admits
    pub fn space(&self) -> u128 {
        crate::choose(self.balls as usize, self.spots)
    }
    pub fn layout(&self) -> Layout {
        Layout::new(self.bingos, self.bingos_per_row)
    }
    /// One sampling lane per core. Batches only reproduce on machines with
    /// the same core count.
    pub fn parallel(self) -> Self {
        Self {
            workers: num_cpus::get(),
            ..self
        }
    }

    /// Checks the parameters are coherent and the batch is feasible at all.
    /// k > N is a `Range` error; every other problem is collected into one
    /// `Config` error.
    pub fn validate(&self) -> Result<()> {
        if self.spots > self.balls as usize {
            return Err(Error::Range {
                spots: self.spots,
                balls: self.balls,
            });
        }
        let mut problems = Vec::new();
        if self.bingos == 0 {
            problems.push("bingos must be positive".to_string());
        }
        if self.spots == 0 {
            problems.push("numbers per card must be positive".to_string());
        }
        if self.balls == 0 {
            problems.push("ball pool must be positive".to_string());
        }
        if !(1..=3).contains(&self.cards_per_bingo) {
            problems.push(format!(
                "cards per bingo ({}) must be between 1 and 3",
                self.cards_per_bingo
            ));
        }
        if self.bingos_per_row != 2 {
            problems.push(format!(
                "bingos per row ({}) must be 2 for the paired layout",
                self.bingos_per_row
            ));
        } else if self.bingos % self.bingos_per_row != 0 {
            problems.push(format!(
                "bingos ({}) must be divisible by bingos per row ({})",
                self.bingos, self.bingos_per_row
            ));
        }
        if self.bingos > crate::BingoId::MAX as usize {
            problems.push(format!(
                "bingos ({}) exceeds the numbering limit {}",
                self.bingos,
                crate::BingoId::MAX
            ));
        }
        if self.retries == 0 {
            problems.push("retry bound must be positive".to_string());
        }
        if self.workers == 0 {
            problems.push("workers must be positive".to_string());
        }
        if self.bingos.checked_mul(self.cards_per_bingo).is_none() {
            problems.push(format!(
                "{} bingos of {} cards overflows the card count",
                self.bingos, self.cards_per_bingo
            ));
        } else if self.cards() as u128 > self.space() {
            problems.push(format!(
                "cannot generate {} unique cards, only {} exist",
                self.cards(),
                self.space()
            ));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(problems))
        }
    }
}
