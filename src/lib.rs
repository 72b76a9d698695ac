//! Unique bingo card batches, acceptance audits, live draw sessions and
//! batch draw simulation.
//!
//! A [`generation::Generator`] produces a [`cards::Batch`] whose cards are
//! pairwise unique, an [`audit::Auditor`] gates it, and the audited batch is
//! bound to a [`session::Board`] that both live [`session::Session`]s (kept in a
//! [`hall::Hall`]) and the [`simulation::Simulator`] replay calls against.
pub mod audit;
pub mod cards;
pub mod draw;
pub mod generation;
pub mod hall;
pub mod session;
pub mod simulation;

#[cfg(feature = "server")]
pub mod cli;

mod error;
pub use error::*;

mod id;
pub use id::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A numbered ball, and the value printed on a card. Balls run 1..=N.
pub type Ball = u8;
/// Physical bingo sheet number, starting at 1.
pub type BingoId = u16;

// ============================================================================
// CARD PARAMETERS
// ============================================================================
/// Master seed used when none is given.
pub const SEED: u64 = 31122025;
/// Physical bingos per production batch.
pub const BINGOS: usize = 1200;
/// Numbers printed on each card (k).
pub const SPOTS: usize = 10;
/// Size of the ball pool (N).
pub const BALLS: Ball = 60;
/// Cards printed on one physical bingo (slots A/B/C or D/E/F).
pub const CARDS_PER_BINGO: usize = 3;
/// Bingos printed side by side on one row of the paired export layout.
pub const BINGOS_PER_ROW: usize = 2;

// ============================================================================
// GENERATION
// Rejection sampling: duplicates are redrawn until every slot is filled.
// ============================================================================
/// Draw attempts allowed for a single card slot before giving up.
pub const RETRY_LIMIT: usize = 1 << 16;
/// Registered cards between progress log messages.
pub const PROGRESS_INTERVAL: usize = 500;

// ============================================================================
// PLAY
// ============================================================================
/// Hits needed for a card to win.
pub const WIN_THRESHOLD: usize = 10;
/// Default length of the ranking shown after every call.
pub const RANKING_TOP: usize = 20;
/// Default number of simulated sessions.
pub const TRIALS: usize = 50;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Deterministic generator for the `index`-th worker or trial under `seed`.
/// Independent of thread scheduling, so fixed seeds reproduce fixed results.
pub fn seeded(seed: u64, index: usize) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    use std::hash::DefaultHasher;
    use std::hash::Hash;
    use std::hash::Hasher;
    let ref mut hasher = DefaultHasher::default();
    seed.hash(hasher);
    index.hash(hasher);
    rand::rngs::SmallRng::seed_from_u64(hasher.finish())
}

/// n choose k, saturating at u128::MAX.
pub fn choose(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u128, |acc, i| {
        acc.saturating_mul((n - i) as u128) / (i as u128 + 1)
    })
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
