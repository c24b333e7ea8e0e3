//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter syntax nodes.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find the first node (pre-order, document order) matching a predicate.
///
/// Subtrees for which `descend` returns false are not entered.
pub fn find_first_preorder<'a>(
    root: Node<'a>,
    mut matches: impl FnMut(&Node<'a>) -> bool,
    mut descend: impl FnMut(&Node<'a>) -> bool,
) -> Option<Node<'a>> {
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        if matches(&current) {
            return Some(current);
        }
        if !descend(&current) {
            continue;
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    None
}

/// Count named descendants including the node itself
pub fn count_named_nodes(root: Node<'_>) -> usize {
    let mut count = 0;
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        if current.is_named() {
            count += 1;
        }
        for i in 0..current.child_count() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    count
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node.
///
/// `None` when the node's byte range does not fall on character boundaries
/// of `source` (the tree was built from different text).
#[inline]
pub fn extract_node_text<'a>(node: &Node<'_>, source: &'a str) -> Option<&'a str> {
    source.get(node.byte_range())
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node<'_>) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}
