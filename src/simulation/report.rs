use super::config::Config;
use super::summary::Summary;
use super::trial::Trial;

/// Everything one simulation run produced.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub config: Config,
    /// true when the run was stopped before every trial started
    pub interrupted: bool,
    pub trials: Vec<Trial>,
    pub summary: Summary,
}

impl Report {
    pub fn exhausted(&self) -> impl Iterator<Item = &Trial> {
        self.trials.iter().filter(|t| t.is_exhausted())
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "============================================")?;
        writeln!(f, "          BINGO SIMULATION SUMMARY")?;
        writeln!(f, "============================================")?;
        writeln!(f, "{:<28}{}", "seed", self.config.seed)?;
        writeln!(f, "{:<28}{}", "win threshold", self.config.threshold)?;
        if self.interrupted {
            writeln!(
                f,
                "{:<28}{} of {}",
                "interrupted after", self.summary.trials, self.config.trials
            )?;
        }
        write!(f, "{}", self.summary)?;
        if self.summary.exhausted > 0 {
            writeln!(f, "--- trials without a winner ---")?;
            for trial in self.exhausted() {
                writeln!(f, "{}", trial)?;
            }
        }
        writeln!(f, "============================================")
    }
}
