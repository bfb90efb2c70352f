//! Parsing and fingerprinting for dupscan.
//!
//! A source file goes through three steps here:
//!
//! 1. **Parse**: the file's extension selects a tree-sitter grammar and the
//!    content is parsed into a syntax tree ([`parse_file`]).
//! 2. **Extract**: named nodes spanning at least the caller's minimum line
//!    count become candidate blocks ([`extract_blocks`]).
//! 3. **Normalize + hash**: each candidate's subtree is flattened to its
//!    named, non-comment node kinds and hashed into a [`Fingerprint`]
//!    (`fingerprint` module).
//!
//! Comments and token text never reach the hasher, so clones that differ only
//! in comments, formatting, or literal spelling of identifiers still collide.

mod error;
pub mod fingerprint;
mod grammar;
mod parse;

pub use error::AnalysisError;
pub use grammar::grammar_for;
pub use parse::{
    extract_blocks, parse_file, parse_source, ExtractedBlock, LARGE_ARRAY_MIN_CONTENT_LEN,
    LARGE_ARRAY_MIN_PAYLOAD_LEN,
};

/// Candidate blocks nested deeper than this are not extracted.
pub const MAX_TRAVERSAL_DEPTH: usize = 32;

/// Blocks whose normalized form has fewer contributing nodes than this are
/// too small to be meaningful duplicates.
pub const MIN_FINGERPRINT_NODES: usize = 10;
