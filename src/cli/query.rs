use crate::Ball;
use clap::Parser;

/// One line typed at the live prompt.
#[derive(Debug, Parser)]
pub enum Query {
    #[command(about = "Call a ball", alias = "c")]
    Call {
        #[arg(required = true)]
        number: Ball,
    },
    #[command(about = "Take back the last call", alias = "u")]
    Undo,
    #[command(about = "Clear every call, keep the cards")]
    Reset,
    #[command(about = "Show calls, ranking and winners", alias = "s")]
    State,
    #[command(about = "Show a bingo (0012) or one of its cards (0012-B)")]
    Card {
        #[arg(required = true)]
        card: String,
    },
    #[command(about = "Show the top of the ranking", alias = "t")]
    Top {
        #[arg(default_value_t = crate::RANKING_TOP)]
        n: usize,
    },
}
