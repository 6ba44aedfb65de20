//! domain-checker - classify domains against a suffix block-list
//!
//! Reads the batch protocol from stdin (or a file) and writes one `Bad`/`Good`
//! line per query to stdout (or a file). Diagnostics go to stderr.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use domain_checker::{run_batch, BatchSummary, CheckerOptions, EmptyLabelPolicy};

/// domain-checker - classify domains against a suffix block-list
#[derive(Parser, Debug)]
#[command(name = "domain-checker")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read the batch from FILE instead of stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Write verdicts to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keep empty labels (e.g. "a..b", "a.") as literal labels instead of rejecting them
    #[arg(long)]
    allow_empty_labels: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn options(&self) -> CheckerOptions {
        let policy = if self.allow_empty_labels {
            EmptyLabelPolicy::Literal
        } else {
            EmptyLabelPolicy::Reject
        };
        CheckerOptions::new().with_empty_label_policy(policy)
    }
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(args.verbose >= 2))
        .init();
}

fn run(args: &Args) -> Result<BatchSummary> {
    let options = args.options();

    let input: Box<dyn io::BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    // Verdicts are buffered so a failed batch leaves an existing output file intact
    let mut verdicts = Vec::new();
    let summary = run_batch(input, &mut verdicts, &options).context("Batch failed")?;

    match &args.output {
        Some(path) => fs::write(path, &verdicts)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&verdicts)?;
            stdout.flush()?;
        }
    }

    Ok(summary)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let summary = run(&args)?;
    info!(
        entries = summary.entries,
        distinct_entries = summary.distinct_entries,
        queries = summary.queries,
        blocked = summary.blocked,
        "Batch complete"
    );
    Ok(())
}
