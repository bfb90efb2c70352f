use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a detection run.
///
/// Per-file problems (unreadable, unparseable) are logged and skipped inside
/// the pipeline instead of surfacing here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("source path {path:?} does not exist")]
    MissingRoot { path: PathBuf },

    #[error("invalid exclude pattern {pattern:?}: {source}")]
    ExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
