//! Play-by-play summarization pipeline.
//!
//! Thin orchestration binary: read a raw game log, classify it, aggregate
//! it, write the summary. All decision logic lives in the library crates.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use pbp_core::{classify_game, read_raw_log, ReadError};
use recap::{ConfigError, OutputError, RecapConfig, RecapError, Summarizer};

/// Command line arguments for the pipeline
#[derive(Parser, Debug)]
#[command(name = "pbp")]
#[command(about = "Summarize a basketball play-by-play log")]
struct Args {
    /// Raw game log to read (JSONL, one record per line)
    input: PathBuf,

    /// Where to write the summary JSON
    #[arg(long, default_value = "summary.json")]
    output: PathBuf,

    /// Recap configuration file (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the summary JSON to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

/// Errors surfaced by the pipeline binary.
#[derive(Debug, Error)]
enum PipelineError {
    #[error("reading game log: {0}")]
    Read(#[from] ReadError),
    #[error("loading config: {0}")]
    Config(#[from] ConfigError),
    #[error("aggregating game: {0}")]
    Recap(#[from] RecapError),
    #[error("writing summary: {0}")]
    Output(#[from] OutputError),
    #[error("serializing summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PipelineError> {
    let config = match &args.config {
        Some(path) => RecapConfig::from_file(path)?,
        None => RecapConfig::default(),
    };

    let raw = read_raw_log(&args.input)?;
    let events = classify_game(&raw);
    let summary = Summarizer::new(config).summarize(&events)?;

    println!("Play-by-play summarizer");
    println!("=======================");
    println!("Input: {}", args.input.display());
    println!("Rows: {} raw, {} classified", raw.len(), events.len());
    println!(
        "Final: {} {} - {} {}",
        summary.teams[0],
        summary.score_for(&summary.teams[0]),
        summary.score_for(&summary.teams[1]),
        summary.teams[1],
    );
    println!("Runs detected: {}", summary.scoring_runs.len());
    println!();

    if args.stdout {
        println!("{}", summary.to_json()?);
    } else {
        recap::write_summary(&args.output, &summary)?;
        println!("Saved summary: {}", args.output.display());
    }

    Ok(())
}
