//! Tree Flattener
//!
//! `nodes` and `links` come from a level-order walk driven by a FIFO queue;
//! `hierarchy` is an independent pre-order copy. Link and node order is
//! what the frontend lays out, so level order must hold exactly.

use std::collections::VecDeque;
use tracing::debug;

use crate::features::conversion::domain::ConvertedNode;
use crate::features::flattening::domain::{
    EmptyTree, FlatNode, FlatTree, FlattenOutput, HierarchyNode, Link,
};
use crate::shared::models::NodeId;

/// Flatten a converted tree; `None` gives the empty output
pub fn flatten(tree: Option<&ConvertedNode>) -> FlattenOutput {
    match tree {
        Some(root) => FlattenOutput::Tree(flatten_tree(root)),
        None => FlattenOutput::Empty(EmptyTree::default()),
    }
}

/// Flatten a present tree into its three views
pub fn flatten_tree(root: &ConvertedNode) -> FlatTree {
    let (nodes, links) = level_order(root);
    debug!("flattened {} nodes, {} links", nodes.len(), links.len());

    FlatTree {
        nodes,
        links,
        hierarchy: build_hierarchy(root),
    }
}

fn level_order(root: &ConvertedNode) -> (Vec<FlatNode>, Vec<Link>) {
    let mut nodes = Vec::new();
    let mut links = Vec::new();

    let mut queue: VecDeque<(Option<&ConvertedNode>, Option<(NodeId, &str)>)> = VecDeque::new();
    queue.push_back((Some(root), None));

    while let Some((entry, parent)) = queue.pop_front() {
        // Value leaves have no id and are not part of the graph
        let Some(node) = entry else {
            continue;
        };

        nodes.push(FlatNode {
            id: node.id,
            name: node.name.clone(),
            attributes: node.attributes.clone(),
        });

        if let Some((source, field)) = parent {
            links.push(Link {
                source,
                target: node.id,
                field: field.to_string(),
            });
        }

        for edge in &node.children {
            queue.push_back((edge.node.as_node(), Some((node.id, edge.field.as_str()))));
        }
    }

    (nodes, links)
}

fn build_hierarchy(node: &ConvertedNode) -> HierarchyNode {
    let children: Vec<HierarchyNode> = node
        .child_nodes()
        .map(|(field, child)| {
            let mut copy = build_hierarchy(child);
            copy.field = Some(field.to_string());
            copy
        })
        .collect();

    HierarchyNode {
        id: node.id,
        name: node.name.clone(),
        attributes: node.attributes.clone(),
        children: if children.is_empty() {
            None
        } else {
            Some(children)
        },
        field: None,
    }
}
