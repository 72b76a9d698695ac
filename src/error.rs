use crate::Ball;
use crate::BingoId;

/// Everything the engine can refuse to do.
///
/// Generation-time kinds (`Config`, `Range`, `Exhausted`, `Audit`) abort the
/// pipeline. Session kinds are recoverable and leave state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid or infeasible generation parameters, one message per problem.
    Config(Vec<String>),
    /// More numbers per card than balls in the pool.
    Range { spots: usize, balls: Ball },
    /// A card slot could not be filled with an unused combination.
    Exhausted { slot: usize, attempts: usize },
    /// Names of the acceptance checks the batch failed.
    Audit(Vec<String>),
    AlreadyCalled(Ball),
    OutOfPool { ball: Ball, balls: Ball },
    NothingToUndo,
    UnknownSession(String),
    UnknownBingo(BingoId),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(problems) => write!(f, "invalid configuration: {}", problems.join("; ")),
            Self::Range { spots, balls } => write!(
                f,
                "cannot draw {} distinct numbers from a pool of {}",
                spots, balls
            ),
            Self::Exhausted { slot, attempts } => write!(
                f,
                "no unused combination for card slot {} after {} attempts",
                slot, attempts
            ),
            Self::Audit(failed) => write!(f, "batch failed audit: {}", failed.join(", ")),
            Self::AlreadyCalled(ball) => write!(f, "ball {} was already called", ball),
            Self::OutOfPool { ball, balls } => {
                write!(f, "ball {} is outside the pool 1..={}", ball, balls)
            }
            Self::NothingToUndo => write!(f, "no calls to undo"),
            Self::UnknownSession(id) => write!(f, "unknown session {}", id),
            Self::UnknownBingo(id) => write!(f, "unknown bingo {:04}", id),
        }
    }
}

impl std::error::Error for Error {}
