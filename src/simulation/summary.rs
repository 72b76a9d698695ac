use super::trial::Trial;
use crate::BingoId;
use crate::cards::CardId;
use crate::cards::Slot;
use std::collections::BTreeMap;

/// Location and spread of a sample of counts.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Moments {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
    /// population standard deviation
    pub deviation: f64,
}

impl Moments {
    /// None for an empty sample.
    pub fn of(sample: &[usize]) -> Option<Self> {
        let n = sample.len();
        if n == 0 {
            return None;
        }
        let mut sorted = sample.to_vec();
        sorted.sort_unstable();
        let mean = sorted.iter().sum::<usize>() as f64 / n as f64;
        let median = match n % 2 {
            1 => sorted[n / 2] as f64,
            _ => (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.,
        };
        let variance = sorted
            .iter()
            .map(|&x| (x as f64 - mean).powi(2))
            .sum::<f64>()
            / n as f64;
        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
            deviation: variance.sqrt(),
        })
    }
}

/// Aggregates across every trial of a run.
///
/// Exhausted trials count toward `trials` and `exhausted` and show up as zero
/// winners in `distribution`, but stay out of `calls` and `winners` so a
/// threshold nobody can reach never hides behind an average.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    pub trials: usize,
    pub exhausted: usize,
    /// calls until the first winner, won trials only
    pub calls: Option<Moments>,
    /// simultaneous winners on the winning call, won trials only
    pub winners: Option<Moments>,
    /// simultaneous winner count -> trials
    pub distribution: BTreeMap<usize, usize>,
    pub cards: BTreeMap<CardId, usize>,
    pub slots: BTreeMap<Slot, usize>,
    pub bingos: BTreeMap<BingoId, usize>,
}

impl From<&[Trial]> for Summary {
    fn from(trials: &[Trial]) -> Self {
        let won = trials.iter().filter(|t| !t.is_exhausted());
        let calls = won.clone().map(|t| t.calls()).collect::<Vec<usize>>();
        let counts = won.map(|t| t.winners().len()).collect::<Vec<usize>>();
        let mut distribution = BTreeMap::new();
        let mut cards = BTreeMap::new();
        let mut slots = BTreeMap::new();
        let mut bingos = BTreeMap::new();
        for trial in trials.iter() {
            *distribution.entry(trial.winners().len()).or_insert(0) += 1;
            for card in trial.winners() {
                *cards.entry(*card).or_insert(0) += 1;
                *slots.entry(card.slot).or_insert(0) += 1;
                *bingos.entry(card.bingo).or_insert(0) += 1;
            }
        }
        Self {
            trials: trials.len(),
            exhausted: trials.iter().filter(|t| t.is_exhausted()).count(),
            calls: Moments::of(&calls),
            winners: Moments::of(&counts),
            distribution,
            cards,
            slots,
            bingos,
        }
    }
}

impl Summary {
    /// Bingo with most wins; ties go to the lower id.
    pub fn top_bingo(&self) -> Option<(BingoId, usize)> {
        Self::most(&self.bingos)
    }
    /// Slot with most wins; ties go to the earlier slot.
    pub fn top_slot(&self) -> Option<(Slot, usize)> {
        Self::most(&self.slots)
    }
    pub fn won(&self) -> usize {
        self.trials - self.exhausted
    }

    fn most<K: Copy + Ord>(counts: &BTreeMap<K, usize>) -> Option<(K, usize)> {
        counts
            .iter()
            .map(|(&k, &n)| (k, n))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<28}{}", "trials", self.trials)?;
        writeln!(f, "{:<28}{}", "won", self.won())?;
        writeln!(f, "{:<28}{}", "exhausted (no winner)", self.exhausted)?;
        if let Some(calls) = self.calls {
            writeln!(f, "--- calls to first winner ---")?;
            writeln!(f, "{:<28}{}", "min", calls.min)?;
            writeln!(f, "{:<28}{}", "max", calls.max)?;
            writeln!(f, "{:<28}{:.2}", "mean", calls.mean)?;
            writeln!(f, "{:<28}{:.1}", "median", calls.median)?;
            writeln!(f, "{:<28}{:.2}", "standard deviation", calls.deviation)?;
        }
        if let Some(winners) = self.winners {
            writeln!(f, "--- simultaneous winners ---")?;
            writeln!(f, "{:<28}{:.2}", "mean", winners.mean)?;
            writeln!(f, "{:<28}{}", "max", winners.max)?;
        }
        for (count, trials) in self.distribution.iter() {
            writeln!(f, "{:<28}{}", format!("{} winners", count), trials)?;
        }
        writeln!(f, "--- win frequency ---")?;
        for slot in Slot::all() {
            let wins = self.slots.get(&slot).copied().unwrap_or(0);
            writeln!(f, "{:<28}{}", format!("slot {}", slot), wins)?;
        }
        if let Some((bingo, wins)) = self.top_bingo() {
            writeln!(f, "{:<28}{:04} ({} wins)", "top bingo", bingo, wins)?;
        }
        if let Some((slot, wins)) = self.top_slot() {
            writeln!(f, "{:<28}{} ({} wins)", "top slot", slot, wins)?;
        }
        Ok(())
    }
}
