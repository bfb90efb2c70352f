use std::fs;
use std::path::Path;

use dupscan_types::{Fingerprint, Language};
use tree_sitter::{Node, Parser, Tree, TreeCursor};

use crate::fingerprint::{fingerprint_of, normalize};
use crate::{grammar_for, AnalysisError, MAX_TRAVERSAL_DEPTH};

/// A node's text must exceed this many bytes before the data-literal check
/// even runs.
pub const LARGE_ARRAY_MIN_CONTENT_LEN: usize = 512;

/// Minimum whitespace-stripped payload length for the data-literal check.
pub const LARGE_ARRAY_MIN_PAYLOAD_LEN: usize = 256;

/// One candidate block pulled out of a parsed file.
#[derive(Debug, Clone)]
pub struct ExtractedBlock {
    /// 1-indexed, inclusive.
    pub start_line: usize,
    /// 1-indexed, inclusive.
    pub end_line: usize,
    /// Absent when the block normalized to nothing.
    pub fingerprint: Option<Fingerprint>,
    /// Fingerprint of the nearest enclosing candidate block.
    pub parent_fingerprint: Option<Fingerprint>,
    /// Nodes that contributed to the normalized form.
    pub node_count: usize,
}

impl ExtractedBlock {
    /// Number of source lines the block spans.
    #[must_use]
    pub fn line_span(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Parse in-memory source text as `language`.
pub fn parse_source(source: &str, language: Language) -> Result<Tree, AnalysisError> {
    let mut parser = Parser::new();
    parser.set_language(&grammar_for(language))?;
    parser.parse(source, None).ok_or(AnalysisError::Parse {
        path: Path::new("<memory>").to_path_buf(),
    })
}

/// Read and parse a file, returning its candidate blocks.
///
/// The language comes from the file extension; anything unmapped is an
/// [`AnalysisError::UnsupportedExtension`].
pub fn parse_file(path: &Path, min_lines: usize) -> Result<Vec<ExtractedBlock>, AnalysisError> {
    let language = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
        .ok_or_else(|| AnalysisError::UnsupportedExtension {
            path: path.to_path_buf(),
        })?;

    let source = fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut parser = Parser::new();
    parser.set_language(&grammar_for(language))?;
    let tree = parser.parse(&source, None).ok_or_else(|| AnalysisError::Parse {
        path: path.to_path_buf(),
    })?;

    Ok(extract_blocks(&tree, &source, min_lines))
}

/// Walk the tree and collect every named node spanning at least `min_lines`
/// lines.
///
/// Children of a node that misses the line threshold are never candidates
/// themselves (their span is a subset), so traversal prunes there. Oversized
/// data literals are dropped along with their subtrees.
#[must_use]
pub fn extract_blocks(tree: &Tree, source: &str, min_lines: usize) -> Vec<ExtractedBlock> {
    let mut blocks = Vec::new();
    let mut cursor = tree.walk();
    collect_candidates(&mut cursor, source, min_lines, 0, None, &mut blocks);
    blocks
}

fn collect_candidates(
    cursor: &mut TreeCursor<'_>,
    source: &str,
    min_lines: usize,
    depth: usize,
    parent: Option<&Fingerprint>,
    blocks: &mut Vec<ExtractedBlock>,
) {
    if depth > MAX_TRAVERSAL_DEPTH {
        return;
    }

    loop {
        let node = cursor.node();
        if node.is_named() {
            let start_line = node.start_position().row + 1;
            let end_line = node.end_position().row + 1;
            let line_span = end_line - start_line + 1;

            if line_span >= min_lines {
                if is_large_data_literal(&node, source) {
                    tracing::debug!(start_line, end_line, "skipping data literal");
                } else {
                    let normalized = normalize(node);
                    let fingerprint = if normalized.is_empty() {
                        tracing::debug!(start_line, end_line, "block normalized to nothing");
                        None
                    } else {
                        Some(fingerprint_of(&normalized))
                    };

                    blocks.push(ExtractedBlock {
                        start_line,
                        end_line,
                        fingerprint: fingerprint.clone(),
                        parent_fingerprint: parent.cloned(),
                        node_count: normalized.node_count,
                    });

                    if cursor.goto_first_child() {
                        collect_candidates(
                            cursor,
                            source,
                            min_lines,
                            depth + 1,
                            fingerprint.as_ref(),
                            blocks,
                        );
                        cursor.goto_parent();
                    }
                }
            }
        }

        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

/// Heuristic for embedded data tables: a long run of comma-separated single
/// tokens (firmware blobs, lookup tables). Hashing these drowns real clones
/// in noise.
fn is_large_data_literal(node: &Node<'_>, source: &str) -> bool {
    let content = &source[node.start_byte()..node.end_byte()];
    if content.len() <= LARGE_ARRAY_MIN_CONTENT_LEN {
        return false;
    }

    let payload: String = content.lines().map(str::trim).collect();
    if payload.len() <= LARGE_ARRAY_MIN_PAYLOAD_LEN {
        return false;
    }

    payload
        .split(',')
        .all(|part| !part.trim().is_empty() && !part.trim().contains(' '))
}
