//! Structural assertions over parse results

use astviz_ir::{FlatTree, ParseResult};
use std::collections::{HashMap, HashSet};

/// Unwrap the flattened views of a successful parse
pub fn flat_tree(result: &ParseResult) -> &FlatTree {
    assert!(result.success, "parse failed: {:?}", result.error);
    result
        .flattened
        .as_ref()
        .and_then(|f| f.as_tree())
        .expect("successful parse without flattened tree")
}

/// Every non-root node is the target of exactly one link, and every link
/// target is a known node
pub fn assert_tree_shaped(tree: &FlatTree) {
    assert_eq!(
        tree.nodes.len(),
        tree.links.len() + 1,
        "expected |nodes| == |links| + 1"
    );

    let ids: HashSet<_> = tree.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids.len(), tree.nodes.len(), "duplicate node ids");

    let mut incoming: HashMap<u32, usize> = HashMap::new();
    for link in &tree.links {
        assert!(ids.contains(&link.source), "unknown source {}", link.source);
        assert!(ids.contains(&link.target), "unknown target {}", link.target);
        *incoming.entry(link.target).or_default() += 1;
    }
    assert!(incoming.values().all(|&c| c == 1), "node linked twice");
    assert!(!incoming.contains_key(&tree.nodes[0].id), "root has a parent");
}

/// Node ids appear level by level: every link's source was emitted before
/// its target
pub fn assert_level_order(tree: &FlatTree) {
    let position: HashMap<u32, usize> = tree
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id, i))
        .collect();
    for link in &tree.links {
        assert!(position[&link.source] < position[&link.target]);
    }
}
