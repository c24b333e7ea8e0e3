//! Raw syntax tree produced by the parsing layer
//!
//! A language-neutral, owned snapshot of the parser's tree: every node is a
//! type tag plus an ordered list of named fields. Fields hold a scalar, a
//! single node, a list, or nothing.

use crate::shared::models::Scalar;

/// Value held by a field of a raw node
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Field exists on the node type but is empty
    Null,
    Scalar(Scalar),
    Node(RawNode),
    List(Vec<RawValue>),
}

impl RawValue {
    pub fn as_node(&self) -> Option<&RawNode> {
        match self {
            RawValue::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl From<RawNode> for RawValue {
    fn from(node: RawNode) -> Self {
        RawValue::Node(node)
    }
}

impl From<Scalar> for RawValue {
    fn from(value: Scalar) -> Self {
        RawValue::Scalar(value)
    }
}

/// Named slot on a raw node
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub name: String,
    pub value: RawValue,
}

/// Raw syntax node
#[derive(Debug, Clone, PartialEq)]
pub struct RawNode {
    /// Type tag (e.g. "module", "call")
    pub kind: String,
    /// Fields in declaration order
    pub fields: Vec<RawField>,
}

impl RawNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push_field(name, value);
        self
    }

    pub fn push_field(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.push(RawField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Get a field value by name
    pub fn field(&self, name: &str) -> Option<&RawValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Whether any field holds a node, directly or inside a list
    pub fn has_node_children(&self) -> bool {
        self.fields.iter().any(|f| match &f.value {
            RawValue::Node(_) => true,
            RawValue::List(items) => items.iter().any(|i| matches!(i, RawValue::Node(_))),
            _ => false,
        })
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        fn count_value(value: &RawValue) -> usize {
            match value {
                RawValue::Node(node) => node.node_count(),
                RawValue::List(items) => items.iter().map(count_value).sum(),
                _ => 0,
            }
        }
        1 + self.fields.iter().map(|f| count_value(&f.value)).sum::<usize>()
    }
}
