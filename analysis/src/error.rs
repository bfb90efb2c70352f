use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning a source file into candidate blocks.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no supported language for {path:?}")]
    UnsupportedExtension { path: PathBuf },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("grammar rejected by tree-sitter: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("tree-sitter produced no tree for {path:?}")]
    Parse { path: PathBuf },
}
