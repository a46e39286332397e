//! Sift command-line tool
//!
//! Reads a labeled message file, runs every message through the normalization
//! pipeline and prints the first few results.
//!
//! ## Usage
//!
//! ```bash
//! # Standard step order, built-in stopwords, first 5 records
//! ./target/release/sift spam.csv
//!
//! # Custom order and stopword file
//! ./target/release/sift spam.csv --steps punctuation,lowercase,tokenize,stem --stopwords stop.txt
//!
//! # Reproduce the first-generation order (whitespace collapse last)
//! ./target/release/sift spam.csv --legacy-order
//!
//! # Tab-separated input, abort on the first malformed row
//! ./target/release/sift sms.tsv --delimiter '\t' --on-malformed abort
//! ```
//!
//! Logs go to stderr and honor `RUST_LOG`; the summary goes to stdout.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use sift_core::ingest::{self, RowPolicy};
use sift_core::{report, Pipeline, PipelineConfig, StepKind, Stopwords};

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Normalize labeled messages into token sequences")]
struct Cli {
    /// Delimited file with a header line and `label,message` rows.
    #[arg(default_value = "spam.csv")]
    path: PathBuf,

    /// Number of records to print.
    #[arg(long, short = 'n', default_value_t = 5)]
    limit: usize,

    /// Comma-separated step order, e.g. `punctuation,lowercase,tokenize`.
    #[arg(long, value_delimiter = ',', conflicts_with = "legacy_order")]
    steps: Option<Vec<StepKind>>,

    /// Use the first-generation step order (whitespace collapse last).
    #[arg(long)]
    legacy_order: bool,

    /// Stopword file, one word per line. Replaces the built-in list.
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Field delimiter: a single ASCII character, or `\t`.
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// What to do with malformed rows: skip, default or abort.
    #[arg(long, default_value = "skip")]
    on_malformed: RowPolicy,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sift=info,sift_core=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let delimiter = parse_delimiter(&cli.delimiter)?;

    let rows = ingest::open(&cli.path)?
        .with_delimiter(delimiter)
        .with_policy(cli.on_malformed)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to load {}", cli.path.display()))?;
    info!(rows = rows.len(), path = %cli.path.display(), "loaded messages");

    let pipeline = Pipeline::from_config(&config);
    let records = pipeline.run(rows.into_iter().map(ingest::RawRow::into_pair));
    info!(records = records.len(), "processed messages");

    report::write_summary(io::stdout().lock(), &records, cli.limit)
        .context("failed to write summary")?;
    Ok(())
}

fn build_config(cli: &Cli) -> Result<PipelineConfig> {
    let stopwords = match &cli.stopwords {
        Some(path) => Stopwords::load(path)
            .with_context(|| format!("failed to read stopwords from {}", path.display()))?,
        None => Stopwords::english(),
    };

    let steps = match (&cli.steps, cli.legacy_order) {
        (Some(steps), _) => steps.clone(),
        (None, true) => StepKind::LEGACY.to_vec(),
        (None, false) => StepKind::STANDARD.to_vec(),
    };

    Ok(PipelineConfig { steps, stopwords })
}

fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        s => bail!("delimiter must be a single ASCII character, got `{s}`"),
    }
}
