//! Parse result returned to API callers

use serde::{Deserialize, Serialize};

use crate::features::conversion::ConvertedNode;
use crate::features::flattening::FlattenOutput;

/// Outcome of one `parse_code` call.
///
/// Syntax and parser failures are reported here (`success: false`), never
/// as a Rust error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    pub tree: Option<ConvertedNode>,
    pub error: Option<String>,
    /// Number of `\n`-separated segments of the input
    pub lines: usize,
    pub flattened: Option<FlattenOutput>,
}

impl ParseResult {
    pub fn success(tree: ConvertedNode, flattened: FlattenOutput, lines: usize) -> Self {
        Self {
            success: true,
            tree: Some(tree),
            error: None,
            lines,
            flattened: Some(flattened),
        }
    }

    pub fn failure(error: impl Into<String>, lines: usize) -> Self {
        Self {
            success: false,
            tree: None,
            error: Some(error.into()),
            lines,
            flattened: None,
        }
    }
}
