//! AST normalization and hashing.

use dupscan_types::Fingerprint;
use sha2::{Digest, Sha256};
use tree_sitter::Node;

/// How a subtree reduces to hashable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAst {
    /// One node kind per line, in pre-order.
    pub repr: String,
    /// Number of nodes that contributed to `repr`.
    pub node_count: usize,
}

impl NormalizedAst {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }
}

/// Flatten a subtree to the stream of named, non-comment node kinds.
///
/// Token text is deliberately absent: renamed identifiers, changed literals,
/// and reformatted code all normalize identically as long as the structure
/// matches.
#[must_use]
pub fn normalize(node: Node<'_>) -> NormalizedAst {
    let mut repr = String::new();
    let mut node_count = 0usize;
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        if current.is_named() && !current.kind().contains("comment") {
            repr.push_str(current.kind());
            repr.push('\n');
            node_count += 1;
        }

        let mut cursor = current.walk();
        let children: Vec<Node<'_>> = current.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    NormalizedAst { repr, node_count }
}

/// Hash a normalized representation into a fingerprint.
#[must_use]
pub fn fingerprint_of(normalized: &NormalizedAst) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(normalized.repr.as_bytes());
    Fingerprint::new(format!("{:x}", hasher.finalize()))
}
