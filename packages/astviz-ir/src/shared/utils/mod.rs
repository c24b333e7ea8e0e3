//! Utility modules shared across features
//!
//! - `tree_sitter`: Tree-sitter traversal, text and span helpers

pub mod tree_sitter;
