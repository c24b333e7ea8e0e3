//! Feature modules
//!
//! - `parsing`    : source text → raw syntax tree (tree-sitter)
//! - `conversion` : raw tree → id-stamped converted tree
//! - `flattening` : converted tree → nodes / links / hierarchy

pub mod conversion;
pub mod flattening;
pub mod parsing;
