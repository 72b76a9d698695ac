//! Simulation Binary
//!
//! Regenerates a batch, audits it and replays many sessions against it.
//!
//! Type "Q" + Enter to stop after the running trials.

use bingo::cli::Params;
use bingo::cli::Trials;
use bingo::generation::Generator;
use bingo::session::Board;
use bingo::simulation::Simulator;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Simulate bingo sessions over a generated batch")]
struct Args {
    #[command(flatten)]
    params: Params,
    #[command(flatten)]
    trials: Trials,
    /// list every trial after the summary
    #[arg(long)]
    verbose: bool,
    /// print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    bingo::log();
    let args = Args::parse();
    let config = bingo::generation::Config::from(args.params);
    let batch = Generator::from(config).generate()?;
    let board = Board::new(batch, &config)?;
    let report = Simulator::new(board, args.trials.into())?
        .with_interrupt(bingo::cli::brb())
        .simulate();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
        if args.verbose {
            report.trials.iter().for_each(|trial| println!("{}", trial));
        }
    }
    Ok(())
}
