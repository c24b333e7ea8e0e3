//! Tree Converter
//!
//! Walks a raw tree and stamps every node with a pre-order id.
//! The counter belongs to the converter value, so concurrent parses never
//! share it; build one converter per parse.

use tracing::debug;

use crate::features::conversion::domain::{ChildEdge, Converted, ConvertedNode, ValueLeaf};
use crate::features::parsing::domain::{RawNode, RawValue};
use crate::shared::models::{Attributes, NodeId};

/// Converts raw trees into id-stamped converted trees
#[derive(Debug, Default)]
pub struct TreeConverter {
    next_id: NodeId,
}

impl TreeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out since the last reset
    pub fn assigned(&self) -> NodeId {
        self.next_id
    }

    fn next_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Convert any raw value in node position.
    ///
    /// - absent or `Null` → `None`
    /// - scalar → value leaf
    /// - node → converted node
    /// - list → `None` (a list is never a node)
    pub fn convert(&mut self, raw: Option<&RawValue>) -> Option<Converted> {
        match raw? {
            RawValue::Null => None,
            RawValue::Scalar(value) => Some(Converted::Value(ValueLeaf {
                value: value.clone(),
            })),
            RawValue::Node(node) => Some(Converted::Node(self.convert_node(node))),
            RawValue::List(_) => None,
        }
    }

    /// Convert a node and its subtree
    pub fn convert_node(&mut self, node: &RawNode) -> ConvertedNode {
        let id = self.next_id();

        let mut attributes = Attributes::new();
        for field in &node.fields {
            match &field.value {
                RawValue::Null => {
                    attributes.insert(field.name.clone(), None);
                }
                RawValue::Scalar(value) => {
                    attributes.insert(field.name.clone(), Some(value.clone()));
                }
                RawValue::Node(_) | RawValue::List(_) => {}
            }
        }

        let mut children = Vec::new();
        for field in &node.fields {
            match &field.value {
                RawValue::Node(_) => {
                    if let Some(child) = self.convert(Some(&field.value)) {
                        children.push(ChildEdge {
                            field: field.name.clone(),
                            node: child,
                        });
                    }
                }
                RawValue::List(items) => {
                    for item in items {
                        if let RawValue::List(_) = item {
                            debug!(
                                "dropping nested list in field '{}' of '{}'",
                                field.name, node.kind
                            );
                            continue;
                        }
                        if let Some(child) = self.convert(Some(item)) {
                            children.push(ChildEdge {
                                field: field.name.clone(),
                                node: child,
                            });
                        }
                    }
                }
                RawValue::Null | RawValue::Scalar(_) => {}
            }
        }

        ConvertedNode {
            id,
            name: node.kind.clone(),
            attributes,
            children,
        }
    }
}
