//! Converted tree: the JSON shape handed to the frontend

use serde::{Deserialize, Serialize};

use crate::shared::models::{Attributes, NodeId, Scalar};

/// Converted syntax node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedNode {
    /// Pre-order id, unique within one parse
    pub id: NodeId,
    /// Node type tag
    pub name: String,
    /// Scalar and null fields
    pub attributes: Attributes,
    /// Node-valued fields, in field order
    pub children: Vec<ChildEdge>,
}

/// A child together with the field that holds it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildEdge {
    pub field: String,
    pub node: Converted,
}

/// Bare scalar found where a node was expected.
///
/// Serialized as `{"type": "value", "value": …}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "value")]
pub struct ValueLeaf {
    pub value: Scalar,
}

/// Result of converting a present input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Converted {
    Node(ConvertedNode),
    Value(ValueLeaf),
}

impl Converted {
    pub fn as_node(&self) -> Option<&ConvertedNode> {
        match self {
            Converted::Node(node) => Some(node),
            Converted::Value(_) => None,
        }
    }
}

impl ConvertedNode {
    /// Child nodes, skipping value leaves
    pub fn child_nodes(&self) -> impl Iterator<Item = (&str, &ConvertedNode)> {
        self.children
            .iter()
            .filter_map(|edge| edge.node.as_node().map(|n| (edge.field.as_str(), n)))
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.child_nodes().map(|(_, n)| n.node_count()).sum::<usize>()
    }

    /// Ids in pre-order
    pub fn preorder_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            ids.push(node.id);
            let children: Vec<_> = node.child_nodes().map(|(_, n)| n).collect();
            stack.extend(children.into_iter().rev());
        }
        ids
    }
}
