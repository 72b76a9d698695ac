use super::config::Config;
use crate::audit::Check;
use crate::audit::Report;
use crate::cards::Batch;

/// Metadata summary of a generated batch: everything a textual or tabular
/// report layer renders next to the card tables.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Manifest {
    pub seed: u64,
    pub bingos: usize,
    pub cards_per_bingo: usize,
    pub cards: usize,
    pub spots: usize,
    pub balls: crate::Ball,
    pub rows: usize,
    pub first: (crate::BingoId, crate::BingoId),
    pub second: (crate::BingoId, crate::BingoId),
    /// share of all k-of-N combinations the batch uses
    pub usage: f64,
    pub checks: Vec<(Check, bool)>,
    pub passed: bool,
}

impl Manifest {
    pub fn new(config: &Config, batch: &Batch, report: &Report) -> Self {
        let layout = batch.layout();
        Self {
            seed: batch.seed(),
            bingos: batch.bingos().len(),
            cards_per_bingo: config.cards_per_bingo,
            cards: batch.len(),
            spots: batch.spots(),
            balls: batch.balls(),
            rows: batch.rows().count(),
            first: (*layout.first().start(), *layout.first().end()),
            second: (*layout.second().start(), *layout.second().end()),
            usage: batch.len() as f64 / config.space().max(1) as f64,
            checks: report.verdicts().iter().map(|v| (v.check, v.ok)).collect(),
            passed: report.passed(),
        }
    }
}

impl std::fmt::Display for Manifest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "============================================")?;
        writeln!(f, "          BINGO GENERATION MANIFEST")?;
        writeln!(f, "============================================")?;
        writeln!(f, "{:<24}{}", "seed", self.seed)?;
        writeln!(f, "{:<24}{}", "bingos", self.bingos)?;
        writeln!(f, "{:<24}{}", "cards per bingo", self.cards_per_bingo)?;
        writeln!(f, "{:<24}{}", "cards", self.cards)?;
        writeln!(f, "{:<24}{}", "numbers per card", self.spots)?;
        writeln!(f, "{:<24}1 - {}", "number range", self.balls)?;
        writeln!(f, "{:<24}{}", "paired rows", self.rows)?;
        writeln!(f, "{:<24}{:04} - {:04}", "left numbering", self.first.0, self.first.1)?;
        writeln!(f, "{:<24}{:04} - {:04}", "right numbering", self.second.0, self.second.1)?;
        writeln!(f, "{:<24}{:.6}%", "space usage", self.usage * 100.)?;
        writeln!(f, "--------------------------------------------")?;
        for (check, ok) in self.checks.iter() {
            writeln!(f, "{:<24}{}", check, if *ok { "PASS" } else { "FAIL" })?;
        }
        writeln!(f, "============================================")
    }
}
