use anyhow::{Context, Result};
use clap::Parser;
use concordance::{read_document_file, ReaderConfig};
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "concordance")]
#[command(about = "Alphabetical word concordance annotated with sentence numbers")]
#[command(version)]
struct Args {
    /// Text document to index
    input: PathBuf,

    /// File the concordance is appended to (defaults to standard output)
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries the report, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let (concordance, stats) = read_document_file(&args.input, &ReaderConfig::default())
        .await
        .with_context(|| format!("Invalid input file \"{}\"", args.input.display()))?;

    // WHY: the whole document is parsed before the output is opened, so a failed read
    // never leaves a partial report behind
    let report = concordance.to_string();

    match &args.output {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await
                .with_context(|| format!("Invalid output file \"{}\"", path.display()))?;
            write_report(file, &report)
                .await
                .with_context(|| format!("Failed to write concordance to \"{}\"", path.display()))?;
        }
        None => {
            write_report(tokio::io::stdout(), &report)
                .await
                .context("Failed to write concordance to standard output")?;
        }
    }

    info!(
        lines = stats.lines_read,
        words = stats.words_recorded,
        distinct_words = stats.distinct_words,
        sentences = stats.sentences,
        processing_time_ms = stats.processing_time_ms,
        "Concordance written"
    );

    Ok(())
}

async fn write_report<W: AsyncWrite + Unpin>(mut sink: W, report: &str) -> std::io::Result<()> {
    sink.write_all(report.as_bytes()).await?;
    sink.flush().await
}
