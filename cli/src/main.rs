//! dupscan CLI - scan a source tree and report duplicated code blocks.

use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;
use dupscan_engine::{detect_duplicates, write_report, DetectOptions};
use dupscan_types::{Language, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "dupscan",
    version,
    about = "Detects code duplication across source files"
)]
struct Cli {
    /// Path to the source directory or file to scan
    #[arg(short = 's', long = "source-path")]
    source_path: PathBuf,

    /// Comma-separated languages to scan (default: all supported)
    #[arg(short = 'l', long = "languages", value_delimiter = ',')]
    languages: Vec<Language>,

    /// Comma-separated glob patterns for paths to exclude
    #[arg(short = 'e', long = "excludes", value_delimiter = ',')]
    excludes: Vec<String>,

    /// Report format: json or text
    #[arg(short = 'o', long = "output-format", default_value = "json")]
    output_format: OutputFormat,

    /// File to write the report to (default: stdout)
    #[arg(short = 'f', long = "output-file")]
    output_file: Option<PathBuf>,

    /// Minimum number of lines a block must span to count as a duplicate
    #[arg(short = 't', long = "threshold", default_value_t = 5)]
    threshold: usize,

    /// Worker threads (0 picks a sensible default)
    #[arg(long = "threads", default_value_t = 0)]
    threads: usize,

    /// Skip files larger than this many bytes
    #[arg(long = "max-file-size", default_value_t = 1_048_576)]
    max_file_size: u64,

    /// Enable debug logging
    #[arg(long = "debug")]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    ensure!(
        cli.source_path.exists(),
        "source path {} does not exist",
        cli.source_path.display()
    );

    let options = DetectOptions {
        root: cli.source_path,
        languages: cli.languages,
        excludes: cli.excludes,
        min_lines: cli.threshold,
        max_file_size: cli.max_file_size,
        threads: cli.threads,
    };

    let report = detect_duplicates(&options)?;
    tracing::info!(
        groups = report.records.len(),
        blocks = report.summary.duplicate_blocks,
        "detection finished"
    );

    write_report(&report, cli.output_format, cli.output_file.as_deref())?;
    Ok(())
}

/// Events go to stderr so stdout stays parseable report output.
fn init_tracing(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
