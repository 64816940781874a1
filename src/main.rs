use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use receipt_points::{breakdown, parse_receipt, score, RULES};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "receipt-points",
    version,
    about = "Score receipt JSON files offline with the same rules the server uses."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a receipt file and print each rule's contribution.
    Score {
        /// Path to a receipt JSON document.
        file: PathBuf,

        /// Print the result as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the scoring rules in evaluation order.
    Rules,
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    points: receipt_points::Points,
    rules: &'a [receipt_points::RuleContribution],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Score { file, json } => run_score(&file, json),
        Command::Rules => {
            for (i, rule) in RULES.iter().enumerate() {
                println!("{:>2}. {}", i + 1, rule.name);
            }
            Ok(())
        }
    }
}

fn run_score(file: &Path, json: bool) -> Result<()> {
    let body = fs::read(file).with_context(|| format!("Failed to read receipt file: {:?}", file))?;
    let receipt = parse_receipt(&body).with_context(|| format!("Rejected {:?}", file))?;

    let contributions = breakdown(&receipt);
    let points = score(&receipt);

    if json {
        let report = ScoreReport {
            points,
            rules: &contributions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🧾 {} on {} at {}", receipt.retailer, receipt.purchase_date, receipt.purchase_time);
    println!("{}", "━".repeat(40));
    for c in &contributions {
        println!("{:<24} {:>6}", c.rule, c.points);
    }
    println!("{}", "━".repeat(40));
    println!("{:<24} {:>6}", "total", points);

    Ok(())
}
