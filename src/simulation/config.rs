use crate::Error;
use crate::Result;

/// Parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Config {
    pub trials: usize,
    pub seed: u64,
    /// hits needed for a card to win
    pub threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: crate::TRIALS,
            seed: crate::SEED,
            threshold: crate::WIN_THRESHOLD,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.trials == 0 {
            problems.push("trials must be positive".to_string());
        }
        if self.threshold == 0 {
            problems.push("win threshold must be positive".to_string());
        }
        match problems.is_empty() {
            true => Ok(()),
            false => Err(Error::Config(problems)),
        }
    }
}
