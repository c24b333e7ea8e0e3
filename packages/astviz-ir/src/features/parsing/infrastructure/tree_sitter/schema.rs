//! Grammar schema built from tree-sitter's `node-types.json`
//!
//! Every named node type gets an explicit list of field descriptors, each
//! tagged with the shape of value it holds. Lowering consults this table
//! instead of inspecting nodes ad hoc.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::errors::{AstvizError, Result};

/// Shape of the value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Only anonymous tokens (operators, keywords): lowered to text
    Scalar,
    /// At most one named node
    Child,
    /// Ordered sequence of named nodes
    ChildList,
}

/// One field of a node type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub shape: FieldShape,
}

/// Schema of a single named node type
#[derive(Debug, Clone, Default)]
pub struct NodeSchema {
    pub kind: String,
    /// Named fields, ordered by name as listed in `node-types.json`
    pub fields: Vec<FieldDescriptor>,
    /// Named children that carry no field name
    pub children: Option<FieldDescriptor>,
}

impl NodeSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// node-types.json model
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct NodeTypeEntry {
    #[serde(rename = "type")]
    kind: String,
    named: bool,
    #[serde(default)]
    fields: BTreeMap<String, ChildSpec>,
    #[serde(default)]
    children: Option<ChildSpec>,
}

#[derive(Debug, Deserialize)]
struct ChildSpec {
    multiple: bool,
    types: Vec<TypeRef>,
}

#[derive(Debug, Deserialize)]
struct TypeRef {
    named: bool,
}

impl ChildSpec {
    fn shape(&self) -> FieldShape {
        if self.types.iter().all(|t| !t.named) {
            FieldShape::Scalar
        } else if self.multiple {
            FieldShape::ChildList
        } else {
            FieldShape::Child
        }
    }

    fn descriptor(&self, name: &str) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            shape: self.shape(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GrammarSchema
// ═══════════════════════════════════════════════════════════════════════════

/// Per-node-type field table for one grammar
#[derive(Debug, Clone, Default)]
pub struct GrammarSchema {
    nodes: HashMap<String, NodeSchema>,
}

static PYTHON_SCHEMA: Lazy<std::result::Result<GrammarSchema, String>> = Lazy::new(|| {
    GrammarSchema::from_node_types(tree_sitter_python::NODE_TYPES).map_err(|e| e.to_string())
});

impl GrammarSchema {
    /// Build a schema from the contents of a `node-types.json` file.
    ///
    /// Anonymous token entries and supertypes without fields are kept as
    /// terminal schemas so every named kind resolves.
    pub fn from_node_types(json: &str) -> Result<Self> {
        let entries: Vec<NodeTypeEntry> = serde_json::from_str(json)
            .map_err(|e| AstvizError::Schema(format!("invalid node-types.json: {}", e)))?;

        let nodes = entries
            .into_iter()
            .filter(|entry| entry.named)
            .map(|entry| {
                let schema = NodeSchema {
                    fields: entry
                        .fields
                        .iter()
                        .map(|(name, spec)| spec.descriptor(name))
                        .collect(),
                    children: entry
                        .children
                        .as_ref()
                        .map(|spec| spec.descriptor(super::UNNAMED_FIELD)),
                    kind: entry.kind.clone(),
                };
                (entry.kind, schema)
            })
            .collect();

        Ok(Self { nodes })
    }

    /// Schema of the bundled Python grammar (loaded once)
    pub fn python() -> Result<&'static GrammarSchema> {
        PYTHON_SCHEMA
            .as_ref()
            .map_err(|e| AstvizError::Schema(e.clone()))
    }

    /// Get the schema of a node type
    pub fn node(&self, kind: &str) -> Option<&NodeSchema> {
        self.nodes.get(kind)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"type": "binary_operator", "named": true, "fields": {
            "left": {"multiple": false, "required": true, "types": [{"type": "expression", "named": true}]},
            "operator": {"multiple": false, "required": true, "types": [{"type": "+", "named": false}, {"type": "-", "named": false}]},
            "right": {"multiple": false, "required": true, "types": [{"type": "expression", "named": true}]}
        }},
        {"type": "block", "named": true, "fields": {}, "children": {
            "multiple": true, "required": false, "types": [{"type": "statement", "named": true}]
        }},
        {"type": "identifier", "named": true},
        {"type": "+", "named": false}
    ]"#;

    #[test]
    fn test_field_shapes_from_sample() {
        let schema = GrammarSchema::from_node_types(SAMPLE).unwrap();
        assert_eq!(schema.len(), 3);

        let binop = schema.node("binary_operator").unwrap();
        assert_eq!(binop.field("left").unwrap().shape, FieldShape::Child);
        assert_eq!(binop.field("operator").unwrap().shape, FieldShape::Scalar);
        assert!(binop.children.is_none());

        let block = schema.node("block").unwrap();
        let children = block.children.as_ref().unwrap();
        assert_eq!(children.shape, FieldShape::ChildList);

        let identifier = schema.node("identifier").unwrap();
        assert!(identifier.fields.is_empty() && identifier.children.is_none());
        assert!(schema.node("+").is_none());
    }

    #[test]
    fn test_invalid_json_is_schema_error() {
        let err = GrammarSchema::from_node_types("{not json").unwrap_err();
        assert!(matches!(err, AstvizError::Schema(_)));
    }

    #[test]
    fn test_python_schema_loads() {
        let schema = GrammarSchema::python().unwrap();
        let call = schema.node("call").unwrap();
        assert_eq!(call.field("function").unwrap().shape, FieldShape::Child);
        assert_eq!(call.field("arguments").unwrap().shape, FieldShape::Child);

        let module = schema.node("module").unwrap();
        assert_eq!(
            module.children.as_ref().map(|c| c.shape),
            Some(FieldShape::ChildList)
        );

        let binop = schema.node("binary_operator").unwrap();
        assert_eq!(binop.field("operator").unwrap().shape, FieldShape::Scalar);
        assert!(schema.node("identifier").unwrap().fields.is_empty());
    }
}
