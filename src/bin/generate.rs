//! Generation Binary
//!
//! Validates parameters, generates a batch, audits it and prints the manifest.

use bingo::audit::Auditor;
use bingo::cli::Params;
use bingo::generation::Generator;
use bingo::generation::Manifest;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Generate an audited batch of unique bingo cards")]
struct Args {
    #[command(flatten)]
    params: Params,
    /// print the paired rows after the manifest
    #[arg(long)]
    cards: bool,
    /// print batch, audit and manifest as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    bingo::log();
    let args = Args::parse();
    let config = bingo::generation::Config::from(args.params);
    let batch = Generator::from(config).generate()?;
    let report = Auditor::from(config).audit(&batch);
    let manifest = Manifest::new(&config, &batch, &report);
    if args.json {
        let json = serde_json::json!({
            "manifest": manifest,
            "audit": report,
            "batch": batch,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", manifest);
        println!("{}", report);
        if args.cards {
            batch.rows().for_each(|row| print!("{}", row));
        }
    }
    report.ensure()?;
    Ok(())
}
