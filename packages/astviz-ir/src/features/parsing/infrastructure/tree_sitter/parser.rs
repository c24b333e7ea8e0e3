//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives.

use tracing::{debug, warn};
use tree_sitter::{Node, Parser as TSParser, Tree};

use super::lowering::{Lowering, LoweringOptions};
use super::schema::GrammarSchema;
use crate::errors::{AstvizError, Result};
use crate::features::parsing::domain::{RawNode, SyntaxError};
use crate::features::parsing::ports::SourceParser;
use crate::shared::utils::tree_sitter::{
    count_named_nodes, extract_node_text, find_first_preorder, node_to_span,
};

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
    options: LoweringOptions,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    Python,
}

impl TreeSitterParser {
    /// Create a Python parser
    pub fn python() -> Self {
        Self {
            language: TreeSitterLanguage::Python,
            options: LoweringOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoweringOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::Python => tree_sitter_python::language(),
        }
    }

    fn schema(&self) -> Result<&'static GrammarSchema> {
        match self.language {
            TreeSitterLanguage::Python => GrammarSchema::python(),
        }
    }

    /// Run tree-sitter over the source
    fn parse_tree(&self, source: &str) -> Result<Tree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| AstvizError::parse(format!("Failed to set language: {}", e)))?;

        parser
            .parse(source, None)
            .ok_or_else(|| AstvizError::parse("Failed to parse source code"))
    }
}

/// Locate the first ERROR or MISSING node in document order
fn first_syntax_error(root: Node<'_>, source: &str) -> Option<SyntaxError> {
    let node = find_first_preorder(
        root,
        |n| n.is_error() || n.is_missing(),
        |n| n.has_error(),
    )?;

    let message = if node.is_missing() {
        format!("expected '{}'", node.kind())
    } else if node.child_count() <= 1 {
        match extract_node_text(&node, source).map(str::trim) {
            Some(token) if !token.is_empty() => format!("unexpected '{}'", token),
            _ => "invalid syntax".to_string(),
        }
    } else {
        "invalid syntax".to_string()
    };

    Some(SyntaxError::new(message, node_to_span(&node)))
}

/// Python 2 statement nodes the grammar still accepts, with their keyword
const PYTHON2_STATEMENTS: &[(&str, &str)] = &[("print_statement", "print"), ("exec_statement", "exec")];

/// Locate the first Python 2 `print`/`exec` statement, which Python 3 rejects
fn first_python2_statement(root: Node<'_>) -> Option<SyntaxError> {
    let python2_keyword = |node: &Node<'_>| {
        PYTHON2_STATEMENTS
            .iter()
            .find(|(kind, _)| *kind == node.kind())
            .map(|(_, keyword)| *keyword)
    };

    let node = find_first_preorder(root, |n| python2_keyword(n).is_some(), |_| true)?;
    let keyword = python2_keyword(&node)?;
    Some(SyntaxError::new(
        format!(
            "Missing parentheses in call to '{}'. Did you mean {}(...)?",
            keyword, keyword
        ),
        node_to_span(&node),
    ))
}

impl SourceParser for TreeSitterParser {
    fn parse(&self, source: &str) -> Result<RawNode> {
        let tree = self.parse_tree(source)?;
        let root = tree.root_node();

        if root.has_error() {
            // has_error guarantees an ERROR or MISSING descendant; fall back
            // to the root's own position if the walk disagrees
            let err = first_syntax_error(root, source).unwrap_or_else(|| {
                SyntaxError::new("invalid syntax", node_to_span(&root))
            });
            warn!("syntax error at line {}: {}", err.line(), err.message);
            return Err(err.into());
        }

        if let Some(err) = first_python2_statement(root) {
            warn!("syntax error at line {}: {}", err.line(), err.message);
            return Err(err.into());
        }

        debug!(
            "parsed {} bytes into {} named nodes",
            source.len(),
            count_named_nodes(root)
        );

        Lowering::new(self.schema()?, source, self.options).lower(root)
    }

    fn language_name(&self) -> &'static str {
        match self.language {
            TreeSitterLanguage::Python => "python",
        }
    }
}
