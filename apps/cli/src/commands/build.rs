//! `build`: add puzzles from a YAML file to the collection.

use crate::cli::BuildArgs;
use crate::commands::import::import_batches;
use crate::config::{collection_path, deck_name_from_path, ImportOptions};
use crate::db::SqliteCollection;
use anyhow::{bail, Context, Result};
use chesscard_core::{parse, plan_decks, ScanReport};
use std::fs;

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn report_scan(report: &ScanReport) {
    println!("Scanning {} puzzle stubs", report.total);
    if report.solution_without_fen > 0 {
        tracing::warn!(
            "{} puzzle stubs with a solution and no fen",
            report.solution_without_fen
        );
    }
    if report.fen_without_solution > 0 {
        tracing::warn!(
            "{} puzzle stubs with a fen and no solution",
            report.fen_without_solution
        );
    }
    for name in &report.missing_tag {
        tracing::warn!("no tag for {name}");
    }
    println!("  ==> {} complete puzzles", report.records.len());
}

pub fn run(args: BuildArgs) -> Result<()> {
    if !args.fen_file.exists() {
        bail!("file {} does not exist; no fens available", args.fen_file.display());
    }
    let content = fs::read_to_string(&args.fen_file)
        .with_context(|| format!("failed to read {}", args.fen_file.display()))?;
    let report = parse(&content).with_context(|| format!("failed to parse {}", args.fen_file.display()))?;
    report_scan(&report);

    let deck_name = args
        .deck_name
        .clone()
        .unwrap_or_else(|| deck_name_from_path(&args.fen_file));
    let batches = plan_decks(&deck_name, report.records);

    let path = collection_path(&args.collection)?;
    tracing::info!("opening collection {}", path.display());
    let collection = SqliteCollection::open(&path)
        .with_context(|| format!("failed to open collection {}", path.display()))?;

    let options = ImportOptions::from_args(&args.board, args.strict);
    for outcome in import_batches(&collection, batches, &options)? {
        println!(
            "  ==> created {} {} card{} in {:?}",
            outcome.created,
            outcome.difficulty,
            plural(outcome.created),
            outcome.deck_name
        );
        if outcome.duplicates > 0 {
            tracing::info!("{} already in {:?}", outcome.duplicates, outcome.deck_name);
        }
        if outcome.failed > 0 {
            tracing::warn!(
                "{} puzzle{} in {:?} could not be made into cards",
                outcome.failed,
                plural(outcome.failed),
                outcome.deck_name
            );
        }
    }

    Ok(())
}
