//! Live Session Binary
//!
//! Regenerates a batch and opens an interactive session over it.
//!
//! Commands: call <n>, undo, reset, state, card <bingo>, top <n>, quit

use bingo::cli::Params;
use bingo::cli::Repl;
use bingo::generation::Generator;
use bingo::session::Board;
use clap::Parser;
use std::sync::Arc;

#[derive(Parser)]
#[command(about = "Call balls against a generated batch")]
struct Args {
    #[command(flatten)]
    params: Params,
    /// hits needed to win
    #[arg(long, default_value_t = bingo::WIN_THRESHOLD)]
    threshold: usize,
    /// answer every command with a JSON envelope
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    bingo::log();
    let args = Args::parse();
    let config = bingo::generation::Config::from(args.params);
    let batch = Generator::from(config).generate()?;
    let board = Board::new(batch, &config)?.with_threshold(args.threshold);
    Repl::new(Arc::new(board), args.json).run()
}
