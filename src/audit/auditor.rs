use super::check::Check;
use super::check::Verdict;
use super::report::Report;
use crate::BingoId;
use crate::cards::Batch;
use crate::cards::Slot;
use crate::generation::Config;
use std::collections::HashSet;

/// Runs every [`Check`] over a batch against the parameters it was
/// supposedly generated with. Pure: auditing the same batch twice yields
/// identical reports.
pub struct Auditor {
    config: Config,
}

impl From<Config> for Auditor {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

impl Auditor {
    pub fn audit(&self, batch: &Batch) -> Report {
        let report = Report::from(
            Check::all()
                .into_iter()
                .map(|check| self.check(check, batch))
                .collect::<Vec<Verdict>>(),
        );
        for verdict in report.verdicts() {
            match verdict.ok {
                true => log::debug!("{}", verdict),
                false => log::warn!("{}", verdict),
            }
        }
        match report.passed() {
            true => log::info!("{:<32}{:<16}", "audit passed", batch.len()),
            false => log::warn!("{:<32}{:<16}", "audit failed", batch.len()),
        }
        report
    }

    fn check(&self, check: Check, batch: &Batch) -> Verdict {
        let (ok, detail) = match check {
            Check::Count => self.count(batch),
            Check::Size => self.size(batch),
            Check::Unique => self.unique(batch),
            Check::Range => self.range(batch),
            Check::Distinct => self.distinct(batch),
            Check::Layout => self.layout(batch),
        };
        Verdict { check, ok, detail }
    }

    fn count(&self, batch: &Batch) -> (bool, String) {
        let expected = self.config.cards();
        let actual = batch.len();
        (actual == expected, format!("{} of {}", actual, expected))
    }

    fn size(&self, batch: &Batch) -> (bool, String) {
        let k = self.config.spots;
        if batch.spots() != k {
            return (false, format!("header says {} numbers, not {}", batch.spots(), k));
        }
        let off = batch.cards().filter(|c| c.size() != k).count();
        match off {
            0 => (true, format!("{} each", k)),
            n => (false, format!("{} cards without {} numbers", n, k)),
        }
    }

    /// re-derived from the cards, never from generation bookkeeping
    fn unique(&self, batch: &Batch) -> (bool, String) {
        let ref mut seen = HashSet::new();
        let duplicates = batch
            .cards()
            .filter(|c| !seen.insert(c.signature()))
            .count();
        match duplicates {
            0 => (true, "no duplicates".to_string()),
            n => (false, format!("{} duplicate cards", n)),
        }
    }

    /// the header pool must match too, play sizes its index from it
    fn range(&self, batch: &Batch) -> (bool, String) {
        if batch.balls() != self.config.balls {
            return (
                false,
                format!("header pool {}, not {}", batch.balls(), self.config.balls),
            );
        }
        let lo = batch.cards().flat_map(|c| c.balls().iter()).min().copied();
        let hi = batch.cards().flat_map(|c| c.balls().iter()).max().copied();
        match (lo, hi) {
            (Some(lo), Some(hi)) => (
                lo >= 1 && hi <= self.config.balls,
                format!("[{}, {}]", lo, hi),
            ),
            _ => (true, "no numbers".to_string()),
        }
    }

    fn distinct(&self, batch: &Batch) -> (bool, String) {
        let repeated = batch
            .cards()
            .filter(|c| c.balls().iter().collect::<HashSet<_>>().len() != c.size())
            .count();
        match repeated {
            0 => (true, "no repeats".to_string()),
            n => (false, format!("{} cards repeat a number", n)),
        }
    }

    /// Rows = M / bingos per row, bingos numbered 1..=M in order, the right
    /// column starting at M/2 + 1, and every bingo carrying its column's slots.
    fn layout(&self, batch: &Batch) -> (bool, String) {
        let expected = self.config.layout();
        let rows = batch.rows().count();
        let numbered = batch
            .bingos()
            .iter()
            .enumerate()
            .all(|(i, b)| b.id() as usize == i + 1);
        let slotted = batch.bingos().iter().all(|b| {
            let right = expected.is_right(b.id());
            b.cards().len() == self.config.cards_per_bingo
                && b.cards()
                    .iter()
                    .enumerate()
                    .all(|(p, c)| c.slot() == Slot::of(right, p) && c.bingo() == b.id())
        });
        let start = batch
            .bingos()
            .iter()
            .find(|b| b.is_right())
            .map(|b| b.id());
        let ok = rows == expected.rows()
            && batch.bingos().len() == self.config.bingos
            && numbered
            && slotted
            && start == Some(expected.half() as BingoId + 1);
        let detail = format!(
            "{} of {} rows, right column from {}",
            rows,
            expected.rows(),
            start.map_or("none".to_string(), |s| format!("{:04}", s)),
        );
        (ok, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Bingo;
    use crate::cards::Card;
    use crate::cards::CardId;
    use crate::generation::Generator;

    fn config() -> Config {
        Config {
            bingos: 8,
            ..Config::default()
        }
    }

    fn batch() -> Batch {
        Generator::from(config()).generate().unwrap()
    }

    /// rebuilds the batch with one card's numbers replaced
    fn tamper(batch: &Batch, id: CardId, balls: Vec<crate::Ball>) -> Batch {
        let bingos = batch
            .bingos()
            .iter()
            .map(|b| {
                let cards = b
                    .cards()
                    .iter()
                    .map(|c| match c.id() == id {
                        true => Card::new(c.id(), balls.clone()),
                        false => c.clone(),
                    })
                    .collect();
                Bingo::new(b.id(), cards)
            })
            .collect();
        Batch::new(batch.seed(), batch.spots(), batch.balls(), bingos)
    }

    #[test]
    fn fresh_batch_passes() {
        let report = Auditor::from(config()).audit(&batch());
        assert!(report.passed());
        assert_eq!(report.verdicts().len(), 6);
        assert_eq!(report.ensure(), Ok(()));
    }

    #[test]
    fn idempotent() {
        let batch = batch();
        let auditor = Auditor::from(config());
        assert_eq!(auditor.audit(&batch), auditor.audit(&batch));
    }

    #[test]
    fn detects_duplicate_card() {
        let batch = batch();
        let copy = batch.cards().next().unwrap().balls().to_vec();
        let mut shuffled = copy.clone();
        shuffled.reverse();
        let tampered = tamper(&batch, CardId::new(8, Slot::F), shuffled);
        let report = Auditor::from(config()).audit(&tampered);
        assert!(!report.ok(Check::Unique));
        assert!(report.ok(Check::Count));
        assert!(report.ok(Check::Size));
        assert!(!report.passed());
        assert!(matches!(report.ensure(), Err(crate::Error::Audit(_))));
    }

    #[test]
    fn detects_out_of_range_and_repeats() {
        let batch = batch();
        let tampered = tamper(
            &batch,
            CardId::new(1, Slot::B),
            vec![0, 61, 3, 3, 5, 6, 7, 8, 9, 10],
        );
        let report = Auditor::from(config()).audit(&tampered);
        assert!(!report.ok(Check::Range));
        assert!(!report.ok(Check::Distinct));
        assert!(report.ok(Check::Size));
        assert!(report.ok(Check::Layout));
    }

    #[test]
    fn detects_short_card() {
        let batch = batch();
        let tampered = tamper(&batch, CardId::new(2, Slot::A), vec![1, 2, 3]);
        let report = Auditor::from(config()).audit(&tampered);
        assert!(!report.ok(Check::Size));
        assert!(report.ok(Check::Count));
    }

    #[test]
    fn detects_missing_bingo() {
        let batch = batch();
        let bingos = batch.bingos()[..7].to_vec();
        let truncated = Batch::new(batch.seed(), batch.spots(), batch.balls(), bingos);
        let report = Auditor::from(config()).audit(&truncated);
        assert!(!report.ok(Check::Count));
        assert!(!report.ok(Check::Layout));
    }

    #[test]
    fn detects_mislabelled_header() {
        let batch = batch();
        let relabelled = Batch::new(batch.seed(), batch.spots(), 10, batch.bingos().to_vec());
        let report = Auditor::from(config()).audit(&relabelled);
        assert!(!report.ok(Check::Range));
        assert!(report.ok(Check::Size));
        assert!(report.ok(Check::Unique));
        assert!(!report.passed());
        let relabelled = Batch::new(batch.seed(), 9, batch.balls(), batch.bingos().to_vec());
        let report = Auditor::from(config()).audit(&relabelled);
        assert!(!report.ok(Check::Size));
        assert!(report.ok(Check::Range));
    }

    #[test]
    fn board_refuses_mislabelled_header() {
        let batch = batch();
        let relabelled = Batch::new(batch.seed(), batch.spots(), 10, batch.bingos().to_vec());
        let board = crate::session::Board::new(relabelled, &config());
        assert!(matches!(board, Err(crate::Error::Audit(_))));
    }

    #[test]
    fn detects_misplaced_slots() {
        let batch = batch();
        let mut bingos = batch.bingos().to_vec();
        bingos.swap(0, 7);
        let swapped = Batch::new(batch.seed(), batch.spots(), batch.balls(), bingos);
        let report = Auditor::from(config()).audit(&swapped);
        assert!(!report.ok(Check::Layout));
        assert!(report.ok(Check::Unique));
    }
}
