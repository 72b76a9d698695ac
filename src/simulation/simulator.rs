use super::config::Config;
use super::report::Report;
use super::summary::Summary;
use super::trial::Trial;
use crate::Result;
use crate::draw::Sequence;
use crate::session::Board;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Drives many independent sessions over one board and aggregates them.
///
/// Every trial owns its session and draw sequence, so trials run on any
/// worker; per-trial seeds are fixed up front, which keeps the report
/// independent of scheduling.
pub struct Simulator {
    board: Arc<Board>,
    config: Config,
    interrupt: Option<Arc<AtomicBool>>,
}

impl Simulator {
    pub fn new(board: Board, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board: Arc::new(board.with_threshold(config.threshold)),
            config,
            interrupt: None,
        })
    }

    /// Once `flag` is raised no new trials start; the report covers the
    /// trials that finished.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs with the configured seed.
    pub fn simulate(&self) -> Report {
        let ref mut rng = SmallRng::seed_from_u64(self.config.seed);
        self.run(rng)
    }

    /// Runs with per-trial seeds drawn in order from `rng`.
    pub fn run<R>(&self, rng: &mut R) -> Report
    where
        R: Rng,
    {
        log::info!(
            "{:<32}{:<16}{:<16}",
            "simulating",
            self.config.trials,
            self.board.len()
        );
        let seeds = (0..self.config.trials)
            .map(|_| rng.random::<u64>())
            .collect::<Vec<u64>>();
        let done = AtomicUsize::new(0);
        let trials = seeds
            .into_par_iter()
            .enumerate()
            .filter(|_| !self.interrupted())
            .map(|(index, seed)| {
                let ref mut rng = SmallRng::seed_from_u64(seed);
                let sequence = Sequence::new(rng, self.board.balls());
                let trial = Trial::play(index, self.board.clone(), sequence);
                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                if n % 10 == 0 {
                    log::debug!("{:<32}{:<16}{:<16}", "progress", n, self.config.trials);
                }
                trial
            })
            .collect::<Vec<Trial>>();
        let interrupted = trials.len() < self.config.trials;
        if interrupted {
            log::warn!("{:<32}{:<16}", "simulation interrupted", trials.len());
        }
        let summary = Summary::from(trials.as_slice());
        if summary.exhausted > 0 {
            log::warn!("{:<32}{:<16}", "trials without a winner", summary.exhausted);
        }
        log::info!(
            "{:<32}{:<16}{:<16}",
            "simulated",
            summary.won(),
            summary.exhausted
        );
        Report {
            config: self.config,
            interrupted,
            trials,
            summary,
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Generator;

    fn board() -> Board {
        let config = crate::generation::Config {
            bingos: 40,
            ..Default::default()
        };
        let batch = Generator::from(config).generate().unwrap();
        Board::new(batch, &config).unwrap()
    }

    fn config(trials: usize) -> Config {
        Config {
            trials,
            seed: 11,
            ..Config::default()
        }
    }

    #[test]
    fn deterministic() {
        let a = Simulator::new(board(), config(20)).unwrap().simulate();
        let b = Simulator::new(board(), config(20)).unwrap().simulate();
        assert_eq!(a, b);
        assert_eq!(a.trials.len(), 20);
        assert!(!a.interrupted);
    }

    #[test]
    fn trials_in_index_order() {
        let report = Simulator::new(board(), config(16)).unwrap().simulate();
        let indices = report.trials.iter().map(|t| t.index).collect::<Vec<_>>();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
        assert_eq!(report.summary.exhausted, 0);
        assert_eq!(report.summary.won(), 16);
    }

    #[test]
    fn unreachable_threshold_is_reported() {
        let config = Config {
            threshold: 11,
            ..config(5)
        };
        let report = Simulator::new(board(), config).unwrap().simulate();
        assert_eq!(report.summary.trials, 5);
        assert_eq!(report.summary.exhausted, 5);
        assert_eq!(report.summary.calls, None);
        assert!(report.trials.iter().all(|t| t.is_exhausted()));
    }

    #[test]
    fn interrupt_stops_new_trials() {
        let flag = Arc::new(AtomicBool::new(true));
        let report = Simulator::new(board(), config(8))
            .unwrap()
            .with_interrupt(flag)
            .simulate();
        assert!(report.trials.is_empty());
        assert!(report.interrupted);
        assert_eq!(report.summary.trials, 0);
    }

    #[test]
    fn interrupt_mid_run_keeps_finished_trials() {
        let trials = 4000;
        let full = Simulator::new(board(), config(trials)).unwrap().simulate();
        let flag = Arc::new(AtomicBool::new(false));
        let raiser = {
            let flag = flag.clone();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(5));
                flag.store(true, Ordering::Relaxed);
            })
        };
        let report = Simulator::new(board(), config(trials))
            .unwrap()
            .with_interrupt(flag)
            .simulate();
        raiser.join().unwrap();
        assert_eq!(report.interrupted, report.trials.len() < trials);
        assert_eq!(report.summary.trials, report.trials.len());
        assert!(report.trials.windows(2).all(|w| w[0].index < w[1].index));
        for trial in report.trials.iter() {
            assert_eq!(trial, &full.trials[trial.index]);
        }
    }

    #[test]
    fn rejects_zero_trials() {
        assert!(Simulator::new(board(), config(0)).is_err());
    }
}
