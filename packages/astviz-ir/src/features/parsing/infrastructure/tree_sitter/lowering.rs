//! Lowering: tree-sitter tree → RawNode
//!
//! Walks children in source order and files each one under its field, with
//! the field's shape taken from the grammar schema:
//! - named child in a node field → `RawValue::Node`
//! - anonymous token in a scalar field → its text (several tokens are
//!   joined with one space, e.g. `not in`)
//! - named child without a field → the `children` slot
//! - anything else (punctuation, keywords) is dropped
//!
//! Schema fields a node does not use are emitted as `Null` (or an empty
//! list), so optional parts show up as `null` attributes.
//!
//! Trees nested deeper than `MAX_NESTING_DEPTH` are rejected; conversion,
//! flattening and serialization recurse per level and rely on that bound.

use tree_sitter::Node;

use super::schema::{FieldShape, GrammarSchema, NodeSchema};
use crate::config::ConverterConfig;
use crate::errors::{AstvizError, Result};
use crate::features::parsing::domain::{RawNode, RawValue};
use crate::shared::models::Scalar;
use crate::shared::utils::tree_sitter::{extract_node_text, node_to_span};

/// Field name for named children the grammar does not label
pub const UNNAMED_FIELD: &str = "children";

/// Field name for comments (only with `include_comments`)
pub const COMMENTS_FIELD: &str = "comments";

/// Scalar attribute holding the source text of a node without node children
pub const TEXT_FIELD: &str = "text";

/// Deepest node level (root = 0) lowering accepts
pub const MAX_NESTING_DEPTH: usize = 256;

/// What lowering keeps beyond the grammar's own fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoweringOptions {
    pub include_positions: bool,
    pub include_leaf_text: bool,
    pub include_comments: bool,
}

impl Default for LoweringOptions {
    fn default() -> Self {
        Self {
            include_positions: false,
            include_leaf_text: true,
            include_comments: false,
        }
    }
}

impl From<&ConverterConfig> for LoweringOptions {
    fn from(config: &ConverterConfig) -> Self {
        Self {
            include_positions: config.include_positions,
            include_leaf_text: config.include_leaf_text,
            include_comments: config.include_comments,
        }
    }
}

/// Values collected for one field while walking a node's children
struct Slot {
    name: String,
    shape: FieldShape,
    values: Vec<RawValue>,
}

impl Slot {
    fn into_value(self) -> RawValue {
        match self.shape {
            FieldShape::Scalar => {
                let joined = self
                    .values
                    .iter()
                    .filter_map(|v| match v {
                        RawValue::Scalar(s) => Some(s.to_string()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                RawValue::Scalar(Scalar::Str(joined))
            }
            FieldShape::Child => {
                let mut values = self.values;
                if values.len() == 1 {
                    values.pop().unwrap_or(RawValue::Null)
                } else {
                    RawValue::List(values)
                }
            }
            FieldShape::ChildList => RawValue::List(self.values),
        }
    }
}

fn push_slot(slots: &mut Vec<Slot>, name: &str, shape: FieldShape, value: RawValue) {
    match slots.iter_mut().find(|s| s.name == name) {
        Some(slot) => slot.values.push(value),
        None => slots.push(Slot {
            name: name.to_string(),
            shape,
            values: vec![value],
        }),
    }
}

/// Lowers one parsed tree against a grammar schema
pub struct Lowering<'a> {
    schema: &'a GrammarSchema,
    source: &'a str,
    options: LoweringOptions,
}

impl<'a> Lowering<'a> {
    pub fn new(schema: &'a GrammarSchema, source: &'a str, options: LoweringOptions) -> Self {
        Self {
            schema,
            source,
            options,
        }
    }

    /// Lower a node and its subtree
    pub fn lower(&self, node: Node<'_>) -> Result<RawNode> {
        self.lower_at(node, 0)
    }

    fn lower_at(&self, node: Node<'_>, depth: usize) -> Result<RawNode> {
        if depth > MAX_NESTING_DEPTH {
            return Err(AstvizError::syntax(
                node_to_span(&node).start_line,
                format!("too many nested levels (limit {})", MAX_NESTING_DEPTH),
            ));
        }

        let node_schema = self.schema.node(node.kind());

        let mut slots = Vec::new();
        let mut cursor = node.walk();
        if cursor.goto_first_child() {
            loop {
                let child = cursor.node();
                self.lower_child(node_schema, cursor.field_name(), child, depth + 1, &mut slots)?;
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        let mut raw = RawNode::new(node.kind());
        for slot in slots {
            let name = slot.name.clone();
            raw.push_field(name, slot.into_value());
        }

        if let Some(node_schema) = node_schema {
            for desc in &node_schema.fields {
                if raw.field(&desc.name).is_none() {
                    let empty = match desc.shape {
                        FieldShape::ChildList => RawValue::List(Vec::new()),
                        FieldShape::Scalar | FieldShape::Child => RawValue::Null,
                    };
                    raw.push_field(desc.name.clone(), empty);
                }
            }
        }

        if self.options.include_leaf_text
            && !raw.has_node_children()
            && raw.field(TEXT_FIELD).is_none()
        {
            raw.push_field(TEXT_FIELD, Scalar::from(self.text(&node)?));
        }

        if self.options.include_positions {
            let span = node_to_span(&node);
            raw.push_field("start_line", Scalar::from(span.start_line));
            raw.push_field("start_col", Scalar::from(span.start_col));
            raw.push_field("end_line", Scalar::from(span.end_line));
            raw.push_field("end_col", Scalar::from(span.end_col));
        }

        Ok(raw)
    }

    fn lower_child(
        &self,
        parent: Option<&NodeSchema>,
        field: Option<&str>,
        child: Node<'_>,
        depth: usize,
        slots: &mut Vec<Slot>,
    ) -> Result<()> {
        if child.is_extra() {
            if self.options.include_comments && child.kind() == "comment" {
                let lowered = self.lower_at(child, depth)?;
                push_slot(slots, COMMENTS_FIELD, FieldShape::ChildList, lowered.into());
            }
            return Ok(());
        }

        match field {
            Some(name) => {
                let fallback = if child.is_named() {
                    FieldShape::Child
                } else {
                    FieldShape::Scalar
                };
                let shape = parent
                    .and_then(|s| s.field(name))
                    .map(|d| d.shape)
                    .unwrap_or(fallback);

                match shape {
                    FieldShape::Scalar => {
                        let text = self.text(&child)?;
                        push_slot(slots, name, shape, Scalar::from(text).into());
                    }
                    FieldShape::Child | FieldShape::ChildList if child.is_named() => {
                        let lowered = self.lower_at(child, depth)?;
                        push_slot(slots, name, shape, lowered.into());
                    }
                    // Punctuation inside a node-valued field
                    FieldShape::Child | FieldShape::ChildList => {}
                }
            }
            None if child.is_named() => {
                let shape = parent
                    .and_then(|s| s.children.as_ref())
                    .map(|d| d.shape)
                    .unwrap_or(FieldShape::ChildList);
                let lowered = self.lower_at(child, depth)?;
                push_slot(slots, UNNAMED_FIELD, shape, lowered.into());
            }
            None => {}
        }

        Ok(())
    }

    fn text(&self, node: &Node<'_>) -> Result<&'a str> {
        extract_node_text(node, self.source).ok_or_else(|| {
            AstvizError::parse(format!(
                "node '{}' spans invalid byte range {:?}",
                node.kind(),
                node.byte_range()
            ))
        })
    }
}
