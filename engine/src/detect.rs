use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use dupscan_analysis::{parse_file, MIN_FINGERPRINT_NODES};
use dupscan_types::{
    BlockLocation, DuplicateGroup, DuplicateReport, Fingerprint, Language, ReportSummary,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;

use crate::scan::scan_files;
use crate::EngineError;

/// Stack size for detection workers. Deeply nested trees recurse during
/// extraction, so workers get more room than the rayon default.
pub const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Everything a detection run needs to know.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Directory or single file to scan.
    pub root: PathBuf,
    /// Languages to consider; empty means all supported languages.
    pub languages: Vec<Language>,
    /// Glob patterns for paths to skip.
    pub excludes: Vec<String>,
    /// Minimum line span for a block to count as a duplicate.
    pub min_lines: usize,
    /// Files larger than this many bytes are not parsed.
    pub max_file_size: u64,
    /// Worker threads; 0 lets rayon pick.
    pub threads: usize,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            languages: Vec::new(),
            excludes: Vec::new(),
            min_lines: 5,
            max_file_size: 1_048_576,
            threads: 0,
        }
    }
}

/// One fingerprinted block, ready for grouping.
#[derive(Debug, Clone)]
struct BlockRecord {
    fingerprint: Fingerprint,
    parent: Option<Fingerprint>,
    location: BlockLocation,
}

/// Run the full pipeline: scan, parse in parallel, group, summarize.
pub fn detect_duplicates(options: &DetectOptions) -> Result<DuplicateReport, EngineError> {
    let started = Instant::now();
    let files = scan_files(options)?;
    tracing::info!(
        files = files.len(),
        root = %options.root.display(),
        "scanning for duplicates"
    );

    let pool = ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .stack_size(WORKER_STACK_SIZE)
        .build()?;

    let progress = progress_bar(files.len() as u64);
    let records: Vec<BlockRecord> = pool.install(|| {
        files
            .par_iter()
            .flat_map_iter(|file| {
                progress.set_message(file.display().to_string());
                let records = fingerprint_file(file, options.min_lines);
                progress.inc(1);
                records
            })
            .collect()
    });
    progress.finish_and_clear();

    tracing::info!(
        blocks = records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fingerprinting complete"
    );

    Ok(group_report(records, options.min_lines))
}

fn fingerprint_file(file: &Path, min_lines: usize) -> Vec<BlockRecord> {
    let blocks = match parse_file(file, min_lines) {
        Ok(blocks) => blocks,
        Err(err) => {
            tracing::warn!(path = %file.display(), "skipping file: {err}");
            return Vec::new();
        }
    };

    let source_file = file.to_string_lossy().into_owned();
    blocks
        .into_iter()
        .filter_map(|block| {
            if block.node_count < MIN_FINGERPRINT_NODES {
                return None;
            }
            let location = BlockLocation {
                source_file: source_file.clone(),
                start_line_number: block.start_line,
                end_line_number: block.end_line,
            };
            block.fingerprint.map(|fingerprint| BlockRecord {
                fingerprint,
                parent: block.parent_fingerprint,
                location,
            })
        })
        .collect()
}

/// Group blocks by fingerprint and fold qualifying groups into a report.
///
/// A group qualifies with two or more blocks spanning at least `min_lines`.
/// A qualifying group whose parent also qualifies is suppressed so only the
/// outermost duplicate appears. Records and blocks are sorted for stable
/// output.
fn group_report(records: Vec<BlockRecord>, min_lines: usize) -> DuplicateReport {
    let mut groups: BTreeMap<Fingerprint, Vec<BlockLocation>> = BTreeMap::new();
    let mut parents: HashMap<Fingerprint, Fingerprint> = HashMap::new();

    for record in records {
        if let Some(parent) = record.parent {
            parents.entry(record.fingerprint.clone()).or_insert(parent);
        }
        groups
            .entry(record.fingerprint)
            .or_default()
            .push(record.location);
    }

    let qualifying: BTreeSet<&Fingerprint> = groups
        .iter()
        .filter(|(_, blocks)| blocks.len() > 1 && blocks[0].line_span() >= min_lines)
        .map(|(fingerprint, _)| fingerprint)
        .collect();

    let mut summary = ReportSummary::default();
    let mut duplicate_files: BTreeSet<&str> = BTreeSet::new();
    let mut report_records = Vec::new();

    for fingerprint in qualifying.iter().copied() {
        let suppressed = parents
            .get(fingerprint)
            .is_some_and(|parent| qualifying.contains(parent));
        if suppressed {
            continue;
        }

        for block in &groups[fingerprint] {
            duplicate_files.insert(block.source_file.as_str());
        }

        let mut blocks = groups[fingerprint].clone();
        blocks.sort_by(|a, b| {
            (&a.source_file, a.start_line_number).cmp(&(&b.source_file, b.start_line_number))
        });

        summary.duplicate_blocks += blocks.len();
        summary.duplicate_lines += blocks.iter().map(BlockLocation::line_span).sum::<usize>();

        report_records.push(DuplicateGroup {
            fingerprint: fingerprint.clone(),
            line_count: blocks[0].line_span(),
            blocks,
        });
    }

    summary.duplicate_files = duplicate_files.len();

    DuplicateReport {
        summary,
        records: report_records,
    }
}

fn progress_bar(total: u64) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress template is valid")
            .progress_chars("#>-"),
    );
    bar
}
