use crate::Ball;
use crate::generation;
use crate::simulation;
use clap::Args;

/// Generation parameters shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct Params {
    /// master seed
    #[arg(long, default_value_t = crate::SEED)]
    pub seed: u64,
    /// physical bingos to generate
    #[arg(long, short = 'm', default_value_t = crate::BINGOS)]
    pub bingos: usize,
    /// numbers per card
    #[arg(long, short = 'k', default_value_t = crate::SPOTS)]
    pub spots: usize,
    /// size of the ball pool
    #[arg(long, short = 'n', default_value_t = crate::BALLS)]
    pub balls: Ball,
    #[arg(long, default_value_t = crate::CARDS_PER_BINGO)]
    pub cards_per_bingo: usize,
    /// draw attempts per card slot before giving up
    #[arg(long, default_value_t = crate::RETRY_LIMIT)]
    pub retries: usize,
    /// sampling lanes; keep fixed to reproduce a batch
    #[arg(long, default_value_t = 1)]
    pub workers: usize,
    /// one sampling lane per core, overrides --workers
    #[arg(long)]
    pub parallel: bool,
}

impl From<Params> for generation::Config {
    fn from(params: Params) -> Self {
        let config = Self {
            seed: params.seed,
            bingos: params.bingos,
            spots: params.spots,
            balls: params.balls,
            cards_per_bingo: params.cards_per_bingo,
            bingos_per_row: crate::BINGOS_PER_ROW,
            retries: params.retries,
            workers: params.workers,
        };
        match params.parallel {
            true => config.parallel(),
            false => config,
        }
    }
}

/// Simulation parameters.
#[derive(Debug, Clone, Args)]
pub struct Trials {
    /// simulated sessions
    #[arg(long, short = 't', default_value_t = crate::TRIALS)]
    pub trials: usize,
    /// seed for the draw sequences
    #[arg(long, default_value_t = crate::SEED)]
    pub draws: u64,
    /// hits needed to win
    #[arg(long, default_value_t = crate::WIN_THRESHOLD)]
    pub threshold: usize,
}

impl From<Trials> for simulation::Config {
    fn from(trials: Trials) -> Self {
        Self {
            trials: trials.trials,
            seed: trials.draws,
            threshold: trials.threshold,
        }
    }
}
