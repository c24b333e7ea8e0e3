//! Flattened views of a converted tree
//!
//! Three parallel views for the layout code: a flat node list, the
//! parent/child link list (both breadth-first), and a nested hierarchy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::models::{Attributes, NodeId};

/// Node without structural children.
///
/// Serialized with `"type": "node"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "node")]
pub struct FlatNode {
    pub id: NodeId,
    pub name: String,
    pub attributes: Attributes,
}

/// Parent → child edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
    pub field: String,
}

/// Nested view of the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: NodeId,
    pub name: String,
    pub attributes: Attributes,
    /// Omitted for leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<HierarchyNode>>,
    /// Field connecting this node to its parent; omitted on the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl HierarchyNode {
    pub fn children(&self) -> &[HierarchyNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(HierarchyNode::node_count).sum::<usize>()
    }
}

/// The three views produced for a non-empty tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatTree {
    pub nodes: Vec<FlatNode>,
    pub links: Vec<Link>,
    pub hierarchy: HierarchyNode,
}

/// Serialized as `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyTree {}

/// Flattener output: the three views, or `{}` for an absent tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlattenOutput {
    Tree(FlatTree),
    Empty(EmptyTree),
}

impl FlattenOutput {
    pub fn as_tree(&self) -> Option<&FlatTree> {
        match self {
            FlattenOutput::Tree(tree) => Some(tree),
            FlattenOutput::Empty(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FlattenOutput::Empty(_))
    }
}

impl FlatTree {
    /// Rebuild the nested view from `nodes` and `links` alone.
    ///
    /// The root is the node no link targets. Children keep link order,
    /// which is their tree order since links are emitted breadth-first.
    /// `None` when there is no unique root.
    pub fn to_hierarchy(&self) -> Option<HierarchyNode> {
        let by_id: HashMap<NodeId, &FlatNode> = self.nodes.iter().map(|n| (n.id, n)).collect();

        let mut children_of: HashMap<NodeId, Vec<&Link>> = HashMap::new();
        for link in &self.links {
            children_of.entry(link.source).or_default().push(link);
        }

        let mut roots = self
            .nodes
            .iter()
            .filter(|n| !self.links.iter().any(|l| l.target == n.id));
        let root = roots.next()?;
        if roots.next().is_some() {
            return None;
        }

        fn build(
            node: &FlatNode,
            field: Option<String>,
            by_id: &HashMap<NodeId, &FlatNode>,
            children_of: &HashMap<NodeId, Vec<&Link>>,
        ) -> HierarchyNode {
            let children: Vec<HierarchyNode> = children_of
                .get(&node.id)
                .map(|links| {
                    links
                        .iter()
                        .filter_map(|link| {
                            by_id.get(&link.target).map(|child| {
                                build(child, Some(link.field.clone()), by_id, children_of)
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();

            HierarchyNode {
                id: node.id,
                name: node.name.clone(),
                attributes: node.attributes.clone(),
                children: if children.is_empty() {
                    None
                } else {
                    Some(children)
                },
                field,
            }
        }

        Some(build(root, None, &by_id, &children_of))
    }
}
