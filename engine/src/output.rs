use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use dupscan_types::{DuplicateReport, OutputFormat};

use crate::EngineError;

/// Render a report to its serialized form.
pub fn render_report(
    report: &DuplicateReport,
    format: OutputFormat,
) -> Result<String, EngineError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

/// Render and deliver a report to a file, or to stdout when no path is given.
pub fn write_report(
    report: &DuplicateReport,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<(), EngineError> {
    let rendered = render_report(report, format)?;
    match output_file {
        Some(path) => {
            fs::write(path, rendered.as_bytes())?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn render_text(report: &DuplicateReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} duplicate blocks, {} duplicate lines, {} files involved",
        report.summary.duplicate_blocks,
        report.summary.duplicate_lines,
        report.summary.duplicate_files,
    );

    for group in &report.records {
        let _ = writeln!(
            out,
            "\n{} ({} lines, {} occurrences)",
            group.fingerprint,
            group.line_count,
            group.blocks.len(),
        );
        for block in &group.blocks {
            let _ = writeln!(
                out,
                "  {}:{}-{}",
                block.source_file, block.start_line_number, block.end_line_number,
            );
        }
    }

    out
}
