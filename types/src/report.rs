use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Digest of a block's normalized AST, as lowercase hex.
///
/// Two blocks share a fingerprint exactly when their normalized node-kind
/// streams are identical, so equality here is the definition of "duplicate".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn new(hex: String) -> Self {
        Self(hex)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where one instance of a duplicated block lives.
///
/// Lines are 1-indexed and inclusive on both ends. Field names are part of
/// the report wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLocation {
    pub source_file: String,
    pub start_line_number: usize,
    pub end_line_number: usize,
}

impl BlockLocation {
    /// Number of source lines the block spans.
    #[must_use]
    pub fn line_span(&self) -> usize {
        self.end_line_number - self.start_line_number + 1
    }
}

/// A set of structurally identical blocks found at two or more locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub fingerprint: Fingerprint,
    /// Line span of a single instance.
    pub line_count: usize,
    pub blocks: Vec<BlockLocation>,
}

/// Aggregate counts over all reported groups.
///
/// Key casing is part of the report wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "duplicateBlocks")]
    pub duplicate_blocks: usize,
    #[serde(rename = "duplicateLines")]
    pub duplicate_lines: usize,
    #[serde(rename = "duplicateFiles")]
    pub duplicate_files: usize,
}

/// The complete result of one detection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub summary: ReportSummary,
    pub records: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Serialization format for the final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Error)]
#[error("unsupported output format: {0:?} (expected \"json\" or \"text\")")]
pub struct UnknownFormatError(pub String);

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(UnknownFormatError(other.to_string())),
        }
    }
}
